use axum::response::Html;

/// Registration page. Element ids match `REGISTER_FORM_ID` and `FieldId::element_id`.
pub const REGISTER_PAGE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Register</title>
</head>
<body>
  <h1>Create an account</h1>
  <form id="registerForm" method="post" action="/register">
    <label for="name">Name</label>
    <input id="name" name="name" type="text" required>
    <label for="email">Email</label>
    <input id="email" name="email" type="email" required>
    <label for="password">Password</label>
    <input id="password" name="password" type="password" required>
    <button type="submit">Register</button>
  </form>
  <p><a href="/">Already registered? Login</a></p>
</body>
</html>
"#;

pub async fn handle() -> Html<&'static str> {
    Html(REGISTER_PAGE)
}
