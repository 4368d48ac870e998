//! HTML rendering for the CRUD pages.
//!
//! Kept deliberately thin: plain functions shaping handler-supplied data
//! into pages, no template engine. Everything user-controlled goes through
//! [`escape`] before it reaches markup.

use axum::response::Html;
use roster_core::User;

use crate::infra::flash::FlashMessage;

const STYLE: &str = "\
body { font-family: sans-serif; margin: 2rem auto; max-width: 48rem; }
table { border-collapse: collapse; width: 100%; }
th, td { border: 1px solid #ccc; padding: 0.4rem 0.6rem; text-align: left; }
.alert { padding: 0.6rem; border-radius: 4px; }
.alert-success { background: #e6f4ea; color: #1e4620; }
.alert-danger { background: #fdecea; color: #611a15; }
img.thumb { max-height: 48px; }
nav a { margin-right: 1rem; }";

pub fn index_page(users: &[User], flash: Option<&FlashMessage>) -> Html<String> {
    let mut body = String::new();

    if let Some(flash) = flash {
        body.push_str(&format!(
            "<p class=\"alert alert-{}\">{}</p>\n",
            flash.kind.as_str(),
            escape(&flash.message)
        ));
    }

    if users.is_empty() {
        body.push_str("<p>No users yet.</p>\n");
    } else {
        body.push_str(
            "<table>\n<tr><th>Image</th><th>Name</th><th>Email</th><th>Phone</th><th>Actions</th></tr>\n",
        );
        for user in users {
            let image_cell = match &user.image {
                Some(image) => format!(
                    "<img class=\"thumb\" src=\"/uploads/{0}\" alt=\"{1}\">",
                    escape(image),
                    escape(&user.name)
                ),
                None => "&mdash;".to_string(),
            };
            body.push_str(&format!(
                "<tr><td>{image_cell}</td><td>{}</td><td>{}</td><td>{}</td>\
                 <td><a href=\"/edit/{id}\">Edit</a> <a href=\"/delete/{id}\">Delete</a></td></tr>\n",
                escape(&user.name),
                escape(&user.email),
                escape(&user.phone),
                id = user.id,
            ));
        }
        body.push_str("</table>\n");
    }

    layout("Home Page", &body)
}

pub fn add_page() -> Html<String> {
    let body = "\
<h2>Add User</h2>
<form method=\"post\" action=\"/add\" enctype=\"multipart/form-data\">
  <p><label>Name <input type=\"text\" name=\"name\" required></label></p>
  <p><label>Email <input type=\"email\" name=\"email\" required></label></p>
  <p><label>Phone <input type=\"text\" name=\"phone\" required></label></p>
  <p><label>Image <input type=\"file\" name=\"image\" accept=\"image/*\"></label></p>
  <p><button type=\"submit\">Add User</button></p>
</form>
";
    layout("Add Users", body)
}

pub fn edit_page(user: &User) -> Html<String> {
    let current_image = match &user.image {
        Some(image) => format!(
            "<p><img class=\"thumb\" src=\"/uploads/{0}\" alt=\"{1}\"></p>",
            escape(image),
            escape(&user.name)
        ),
        None => String::new(),
    };

    let body = format!(
        "\
<h2>Edit User</h2>
{current_image}
<form method=\"post\" action=\"/update/{id}\" enctype=\"multipart/form-data\">
  <input type=\"hidden\" name=\"old_image\" value=\"{old_image}\">
  <p><label>Name <input type=\"text\" name=\"name\" value=\"{name}\" required></label></p>
  <p><label>Email <input type=\"email\" name=\"email\" value=\"{email}\" required></label></p>
  <p><label>Phone <input type=\"text\" name=\"phone\" value=\"{phone}\" required></label></p>
  <p><label>Image <input type=\"file\" name=\"image\" accept=\"image/*\"></label></p>
  <p><button type=\"submit\">Update User</button></p>
</form>
",
        id = user.id,
        old_image = escape(user.image.as_deref().unwrap_or_default()),
        name = escape(&user.name),
        email = escape(&user.email),
        phone = escape(&user.phone),
    );

    layout("Edit User", &body)
}

fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n\
<html lang=\"en\">\n\
<head>\n\
<meta charset=\"utf-8\">\n\
<title>{title}</title>\n\
<style>{STYLE}</style>\n\
</head>\n\
<body>\n\
<nav><a href=\"/\">Home</a><a href=\"/add\">Add User</a></nav>\n\
{body}\n\
</body>\n\
</html>\n",
        title = escape(title),
    ))
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn user(image: Option<&str>) -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            name: "Alice <script>".to_string(),
            email: "alice@example.com".to_string(),
            phone: "555-0100".to_string(),
            image: image.map(str::to_string),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn index_escapes_user_content_and_links_actions() {
        let user = user(Some("image_1_a.png"));
        let Html(page) = index_page(std::slice::from_ref(&user), None);

        assert!(page.contains("Alice &lt;script&gt;"));
        assert!(!page.contains("<script>"));
        assert!(page.contains("/uploads/image_1_a.png"));
        assert!(page.contains(&format!("/edit/{}", user.id)));
        assert!(page.contains(&format!("/delete/{}", user.id)));
    }

    #[test]
    fn index_renders_flash_with_kind_class() {
        let Html(page) = index_page(&[], Some(&FlashMessage::success("User added successfully")));
        assert!(page.contains("alert-success"));
        assert!(page.contains("User added successfully"));

        let Html(page) = index_page(&[], Some(&FlashMessage::danger("User not found!")));
        assert!(page.contains("alert-danger"));
    }

    #[test]
    fn edit_form_carries_prior_image_and_values() {
        let user = user(Some("image_1_a.png"));
        let Html(page) = edit_page(&user);

        assert!(page.contains(&format!("action=\"/update/{}\"", user.id)));
        assert!(page.contains("name=\"old_image\" value=\"image_1_a.png\""));
        assert!(page.contains("value=\"alice@example.com\""));
    }

    #[test]
    fn edit_form_without_image_has_empty_old_image() {
        let Html(page) = edit_page(&user(None));
        assert!(page.contains("name=\"old_image\" value=\"\""));
    }
}
