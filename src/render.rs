//! Voting page markup. Kept deliberately plain: two submit buttons posting
//! back to `/`, the serving hostname, and the vote just cast if any.

use axum::response::Html;

use crate::state::State;

pub fn voting_page(state: &State, voter_id: &str, vote: Option<&str>) -> Html<String> {
    let option_a = escape(&state.config.option_a);
    let option_b = escape(&state.config.option_b);
    let hostname = escape(&state.hostname);
    let voter_id = escape(voter_id);

    let current = match vote {
        Some(vote) => format!("<p id=\"result\">You voted for {}</p>", escape(vote)),
        None => String::new(),
    };

    Html(format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><title>{option_a} vs {option_b}</title></head>\n\
         <body>\n\
         <h1>{option_a} vs {option_b}!</h1>\n\
         <form method=\"POST\" action=\"/\">\n\
         <button name=\"vote\" value=\"{option_a}\" type=\"submit\">{option_a}</button>\n\
         <button name=\"vote\" value=\"{option_b}\" type=\"submit\">{option_b}</button>\n\
         </form>\n\
         {current}\n\
         <p>Voter ID: {voter_id}</p>\n\
         <p>Served by {hostname}</p>\n\
         </body>\n\
         </html>\n"
    ))
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::escape;

    #[test]
    fn escape_handles_markup_characters() {
        assert_eq!(escape("Cats & <Dogs>"), "Cats &amp; &lt;Dogs&gt;");
        assert_eq!(escape("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(escape("plain"), "plain");
    }
}
