use crate::domain::selection::model::ClusterOverview;

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");
const ERROR_TEMPLATE: &str = include_str!("../../templates/error.html");

/// Index page: context name plus one `<option>` per namespace, in order.
pub fn render_index(overview: &ClusterOverview) -> String {
    let options = overview
        .namespaces
        .iter()
        .map(|ns| {
            let name = escape_html(&ns.name);
            format!("                                <option value=\"{name}\">{name}</option>")
        })
        .collect::<Vec<_>>()
        .join("\n");

    fill(
        INDEX_TEMPLATE,
        &[
            ("{{ current_context }}", escape_html(&overview.context).as_str()),
            ("{{ namespace_options }}", options.as_str()),
        ],
    )
}

pub fn render_error(message: &str) -> String {
    fill(ERROR_TEMPLATE, &[("{{ error }}", escape_html(message).as_str())])
}

/// Substitutes placeholders in one left-to-right pass over the template, so
/// text inside a substituted value is never matched again.
fn fill(template: &str, slots: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match slots.iter().find(|(placeholder, _)| tail.starts_with(*placeholder)) {
            Some((placeholder, value)) => {
                out.push_str(value);
                rest = &tail[placeholder.len()..];
            }
            None => {
                out.push_str("{{");
                rest = &tail[2..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
