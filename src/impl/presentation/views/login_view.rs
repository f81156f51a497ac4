pub fn render() -> String {
    r#"<div class="login-page">
  <h1>Billed</h1>
  <form data-testid="form-employee">
    <label for="employee-email-input">Votre email</label>
    <input type="email" data-testid="employee-email-input" required>
    <label for="employee-password-input">Mot de passe</label>
    <input type="password" data-testid="employee-password-input" required>
    <button type="submit" data-testid="employee-login-button">Se connecter</button>
  </form>
  <form data-testid="form-admin">
    <label for="admin-email-input">Votre email</label>
    <input type="email" data-testid="admin-email-input" required>
    <label for="admin-password-input">Mot de passe</label>
    <input type="password" data-testid="admin-password-input" required>
    <button type="submit" data-testid="admin-login-button">Se connecter</button>
  </form>
</div>"#
        .into()
}
