/**
 * HTML Views
 *
 * Page rendering as pure functions of the data they are given. All
 * user-supplied text is escaped before it is placed in markup.
 */

use axum::response::Html;

use crate::backend::notes::db::Note;

/// Escape text for use in HTML element content and attribute values
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{} - Notekeeper</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape_html(title),
        body
    ))
}

fn credentials_form(action: &str, submit: &str) -> String {
    format!(
        r#"<form method="post" action="{action}">
<label>Username <input type="text" name="username" required></label>
<label>Password <input type="password" name="password" required></label>
<button type="submit">{submit}</button>
</form>"#
    )
}

/// Login page
pub fn login_page() -> Html<String> {
    let body = format!(
        "<h1>Log in</h1>\n{}\n<p>No account? <a href=\"/register\">Register</a></p>",
        credentials_form("/login", "Log in")
    );
    layout("Log in", &body)
}

/// Registration page
pub fn register_page() -> Html<String> {
    let body = format!(
        "<h1>Register</h1>\n{}\n<p>Already registered? <a href=\"/login\">Log in</a></p>",
        credentials_form("/register", "Register")
    );
    layout("Register", &body)
}

/// Notes list with the new-note form
pub fn notes_page(notes: &[Note]) -> Html<String> {
    let mut body = String::from(
        r#"<h1>Your notes</h1>
<p><a href="/logout">Log out</a></p>
<form method="post" action="/notes">
<textarea name="note" required></textarea>
<button type="submit">Add note</button>
</form>
"#,
    );

    if notes.is_empty() {
        body.push_str("<p>No notes yet.</p>");
    } else {
        body.push_str("<ul>\n");
        for note in notes {
            body.push_str(&format!(
                r#"<li>
<p class="note-content">{content}</p>
<small>{created}</small>
<a href="/edit_note/{id}">Edit</a>
<form method="post" action="/delete_note/{id}"><button type="submit">Delete</button></form>
</li>
"#,
                content = escape_html(&note.content),
                created = note.created_at.format("%Y-%m-%d %H:%M"),
                id = note.id,
            ));
        }
        body.push_str("</ul>");
    }

    layout("Notes", &body)
}

/// Edit form for a single note
pub fn edit_note_page(note: &Note) -> Html<String> {
    let body = format!(
        r#"<h1>Edit note</h1>
<form method="post" action="/edit_note/{id}">
<textarea name="updated_note" required>{content}</textarea>
<button type="submit">Save</button>
</form>
<p><a href="/notes">Back to notes</a></p>"#,
        id = note.id,
        content = escape_html(&note.content),
    );
    layout("Edit note", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn note(id: i64, content: &str) -> Note {
        Note {
            id,
            content: content.to_string(),
            created_at: Utc::now(),
            user_id: 1,
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#x27;y&#x27;&lt;/script&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_notes_page_escapes_content() {
        let Html(page) = notes_page(&[note(3, "<b>bold</b>")]);
        assert!(page.contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(!page.contains("<b>bold</b>"));
        assert!(page.contains("/edit_note/3"));
        assert!(page.contains("/delete_note/3"));
    }

    #[test]
    fn test_empty_notes_page() {
        let Html(page) = notes_page(&[]);
        assert!(page.contains("No notes yet."));
    }

    #[test]
    fn test_edit_page_prefills_content() {
        let Html(page) = edit_note_page(&note(9, "buy milk"));
        assert!(page.contains("action=\"/edit_note/9\""));
        assert!(page.contains(">buy milk</textarea>"));
        assert!(page.contains("name=\"updated_note\""));
    }

    #[test]
    fn test_credential_forms() {
        let Html(login) = login_page();
        assert!(login.contains("action=\"/login\""));
        let Html(register) = register_page();
        assert!(register.contains("action=\"/register\""));
        assert!(register.contains("name=\"password\""));
    }
}
