//! Form Validation
//!
//! Client-side checks run before any network call. Each validator returns the
//! first failing message so forms can show a single inline error.

/// Minimum password length accepted by the register form
const MIN_PASSWORD_LEN: usize = 8;

pub fn validate_register(
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
) -> Result<(), String> {
    if first_name.trim().is_empty() {
        return Err("First name is required".to_string());
    }
    if last_name.trim().is_empty() {
        return Err("Last name is required".to_string());
    }
    validate_email(email)?;
    if password.len() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        ));
    }
    Ok(())
}

pub fn validate_login(email: &str, password: &str) -> Result<(), String> {
    validate_email(email)?;
    if password.is_empty() {
        return Err("Password is required".to_string());
    }
    Ok(())
}

pub fn validate_task_name(task_name: &str) -> Result<(), String> {
    if task_name.trim().is_empty() {
        return Err("Task name is required".to_string());
    }
    Ok(())
}

pub fn validate_list_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("List title is required".to_string());
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), String> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err("Email is required".to_string());
    }
    // Minimal shape check: local@domain with a dot in the domain
    let valid = trimmed
        .split_once('@')
        .map(|(local, domain)| !local.is_empty() && domain.contains('.') && !domain.starts_with('.'))
        .unwrap_or(false);
    if !valid {
        return Err("Email is not valid".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_rejects_short_password() {
        let result = validate_register("Ada", "Lovelace", "ada@example.com", "short");
        assert!(result.is_err());
    }

    #[test]
    fn test_register_accepts_valid_input() {
        assert!(validate_register("Ada", "Lovelace", "ada@example.com", "longenough").is_ok());
    }

    #[test]
    fn test_email_shape() {
        assert!(validate_login("not-an-email", "pw").is_err());
        assert!(validate_login("a@b", "pw").is_err());
        assert!(validate_login("a@b.co", "pw").is_ok());
    }

    #[test]
    fn test_task_name_required() {
        assert!(validate_task_name("   ").is_err());
        assert!(validate_task_name("Ship it").is_ok());
    }

    #[test]
    fn test_list_title_required() {
        assert!(validate_list_title("").is_err());
        assert!(validate_list_title("Groceries").is_ok());
    }
}
