//! Multipart form decoding for the add/update pages.

use axum::body::Bytes;
use axum::extract::Multipart;

use crate::errors::AppError;

/// A file part submitted alongside the form fields.
#[derive(Debug)]
pub struct Upload {
    pub original_name: String,
    pub bytes: Bytes,
}

/// The decoded add/update form. Text fields default to empty strings and
/// are rejected later by record validation; unknown parts are drained and
/// ignored.
#[derive(Debug, Default)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub old_image: Option<String>,
    pub upload: Option<Upload>,
}

impl UserForm {
    /// The prior stored file name carried by the edit form, if the client
    /// submitted a non-empty one.
    pub fn prior_image(&self) -> Option<&str> {
        self.old_image.as_deref().filter(|name| !name.is_empty())
    }
}

pub async fn read_user_form(mut multipart: Multipart) -> Result<UserForm, AppError> {
    let mut form = UserForm::default();

    while let Some(field) = multipart.next_field().await? {
        let Some(field_name) = field.name().map(str::to_string) else {
            continue;
        };

        match field_name.as_str() {
            "name" => form.name = field.text().await?,
            "email" => form.email = field.text().await?,
            "phone" => form.phone = field.text().await?,
            "old_image" => form.old_image = Some(field.text().await?),
            "image" => {
                let original_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                // Browsers send an empty, nameless part when no file was
                // selected; that is "no upload", not an empty upload.
                if !original_name.is_empty() {
                    form.upload = Some(Upload {
                        original_name,
                        bytes,
                    });
                }
            }
            _ => {}
        }
    }

    Ok(form)
}
