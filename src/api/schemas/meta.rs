use serde::Serialize;

/// Form-validation bounds clients need before rendering a login or signup
/// form.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordPolicy {
    pub password_min_length: usize,
    pub password_max_length: usize,
    pub username_min_length: usize,
    pub username_max_length: usize,
}
