use crate::email::application::ports::outgoing::{ContactNotice, OutgoingEmail};

pub const SUBJECT_PREFIX: &str = "Web Portfolio Message: ";

/// Escapes the five HTML-significant characters.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

pub fn render_text(notice: &ContactNotice) -> String {
    format!(
        "New contact form submission\n\nName: {}\nEmail: {}\nSubject: {}\n\nMessage:\n{}",
        notice.full_name, notice.email, notice.subject, notice.message
    )
}

pub fn render_html(notice: &ContactNotice) -> String {
    format!(
        r#"<div style="font-family:Arial,sans-serif;line-height:1.6;color:#111;max-width:640px">
  <h2 style="margin:0 0 12px">New Portfolio Contact Message</h2>
  <p style="margin:0 0 8px"><strong>Name:</strong> {name}</p>
  <p style="margin:0 0 8px"><strong>Email:</strong> {email}</p>
  <p style="margin:0 0 8px"><strong>Subject:</strong> {subject}</p>
  <hr style="margin:16px 0;border:none;border-top:1px solid #e5e7eb" />
  <p style="white-space:pre-wrap;margin:0">{message}</p>
</div>"#,
        name = escape_html(&notice.full_name),
        email = escape_html(&notice.email),
        subject = escape_html(&notice.subject),
        message = escape_html(&notice.message),
    )
}

/// Owner notification for one submission. Replies go to the submitter.
pub fn contact_notification(notice: &ContactNotice, from: &str, to: &str) -> OutgoingEmail {
    OutgoingEmail {
        from: from.to_string(),
        to: to.to_string(),
        reply_to: Some(notice.email.clone()),
        subject: format!("{SUBJECT_PREFIX}{}", notice.subject),
        text: render_text(notice),
        html: render_html(notice),
    }
}
