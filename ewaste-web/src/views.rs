//! HTML pages for the survey and its result.

use ewaste_core::{
    Comparison, DisposalAction, EstimateReport, SurveyInput, UpgradeFrequency, estimator,
};

const STYLE: &str = "body{font-family:sans-serif;max-width:40rem;margin:2rem auto;padding:0 1rem}\
label{display:block;margin:.8rem 0 .2rem}input,select{width:100%;padding:.3rem}\
button{margin-top:1rem;padding:.5rem 1rem}table{border-collapse:collapse;width:100%}\
td,th{border-bottom:1px solid #ccc;padding:.3rem;text-align:left}\
.figure{font-size:2rem;font-weight:bold}";

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}</body>\n</html>\n"
    )
}

fn number_field(name: &str, label: &str) -> String {
    format!(
        "<label for=\"{name}\">{label}</label>\n\
         <input type=\"number\" id=\"{name}\" name=\"{name}\" min=\"0\" step=\"1\" value=\"0\">\n"
    )
}

fn select_field<'opts>(
    name: &str,
    label: &str,
    options: impl Iterator<Item = (&'opts str, &'opts str, bool)>,
) -> String {
    let options: String = options
        .map(|(code, text, selected)| {
            let selected = if selected { " selected" } else { "" };
            format!("<option value=\"{code}\"{selected}>{text}</option>\n")
        })
        .collect();
    format!(
        "<label for=\"{name}\">{label}</label>\n<select id=\"{name}\" name=\"{name}\">\n\
         {options}</select>\n"
    )
}

/// The survey form posting to `/calculate`.
#[must_use]
pub fn survey_page() -> String {
    let mut body = String::from(
        "<h1>How much e-waste does your household make?</h1>\n\
         <p>Answer six quick questions to estimate your yearly electronic waste.</p>\n\
         <form method=\"post\" action=\"/calculate\">\n",
    );

    body.push_str(&number_field("phones_drawer", "Old phones lying unused in a drawer"));
    body.push_str(&number_field("laptops_5yrs", "Laptops currently in use"));
    body.push_str(&number_field("tvs_use", "Televisions currently in use"));
    body.push_str(&number_field("chargers", "Chargers nobody uses anymore"));

    let default_frequency = UpgradeFrequency::default();
    body.push_str(&select_field(
        "upgrade_freq",
        "How often do you get a new phone?",
        UpgradeFrequency::ALL
            .iter()
            .map(|option| (option.code(), option.label(), *option == default_frequency)),
    ));

    let default_action = DisposalAction::default();
    body.push_str(&select_field(
        "old_device_action",
        "What happens to your old devices?",
        DisposalAction::ALL
            .iter()
            .map(|option| (option.code(), option.label(), *option == default_action)),
    ));

    body.push_str("<button type=\"submit\">Calculate</button>\n</form>\n");
    page("E-waste survey", &body)
}

fn comparison_sentence(comparison: Comparison) -> &'static str {
    match comparison {
        Comparison::Below => "That is less than the national per-capita figure.",
        Comparison::Equal => "That matches the national per-capita figure.",
        Comparison::Above => "That is more than the national per-capita figure.",
    }
}

/// The result page for a computed estimate.
#[must_use]
pub fn result_page(input: &SurveyInput, report: &EstimateReport) -> String {
    let result = &report.result;
    let parts = &report.breakdown;
    let summary = format!(
        "<h1>Your yearly e-waste</h1>\n\
         <p class=\"figure\">{personal:.2} kg</p>\n\
         <p>{percent:.2}% of the national per-capita figure of {per_capita:.2} kg. {sentence}</p>\n\
         <p>The average person generates about {average} kg per year.</p>\n",
        personal = result.personal,
        percent = result.contribution_percent,
        per_capita = result.per_capita,
        sentence = comparison_sentence(result.comparison),
        average = result.average_individual,
    );

    let sources = format!(
        "<h2>Where it comes from</h2>\n<table>\n\
         <tr><th>Unused phones and chargers</th><td>{unused:.2} kg</td></tr>\n\
         <tr><th>Share of laptops and TVs in use</th><td>{active:.2} kg</td></tr>\n\
         <tr><th>Phone upgrades</th><td>{upgrade:.2} kg</td></tr>\n\
         <tr><th>Disposal factor</th><td>&times; {factor}</td></tr>\n</table>\n",
        unused = estimator::round_for_display(parts.unused_kg),
        active = estimator::round_for_display(parts.active_kg),
        upgrade = estimator::round_for_display(parts.upgrade_kg),
        factor = parts.disposal_factor,
    );

    let answers = format!(
        "<h2>Your answers</h2>\n<table>\n\
         <tr><th>Phones in a drawer</th><td>{phones}</td></tr>\n\
         <tr><th>Laptops in use</th><td>{laptops}</td></tr>\n\
         <tr><th>Televisions in use</th><td>{tvs}</td></tr>\n\
         <tr><th>Unused chargers</th><td>{chargers}</td></tr>\n\
         <tr><th>New phone</th><td>{frequency}</td></tr>\n\
         <tr><th>Old devices</th><td>{disposal}</td></tr>\n</table>\n\
         <p><a href=\"/\">Take the survey again</a></p>\n",
        phones = input.phones_in_drawer,
        laptops = input.laptops_in_use,
        tvs = input.tvs_in_use,
        chargers = input.unused_chargers,
        frequency = input.upgrade_frequency.label(),
        disposal = input.disposal.label(),
    );

    page("Your e-waste estimate", &format!("{summary}{sources}{answers}"))
}
