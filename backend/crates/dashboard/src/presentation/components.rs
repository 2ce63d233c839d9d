//! HTML Components
//!
//! Server-rendered building blocks for the dashboard pages. Every piece of
//! interpolated text goes through [`escape`].

use auth::AuthContext;
use chrono::{Datelike, Utc};

pub const SIGN_IN_PATH: &str = "/api/logto/sign-in";
pub const SIGN_OUT_PATH: &str = "/api/logto/sign-out";

/// Escape text for HTML element content and double-quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn logo() -> String {
    r#"<a href="/" class="logo" aria-label="Turing Biosciences home"><span class="logo-mark">T</span><span class="logo-text">Turing Biosciences</span></a>"#
        .to_string()
}

/// Sign-in/out control reflecting the current auth state
pub fn auth_button(auth: &AuthContext) -> String {
    if auth.is_loading() {
        return r#"<span class="auth-button auth-button--loading">Loading…</span>"#.to_string();
    }
    if auth.is_authenticated() {
        format!(r#"<a class="auth-button" href="{SIGN_OUT_PATH}">Sign out</a>"#)
    } else {
        format!(r#"<a class="auth-button auth-button--primary" href="{SIGN_IN_PATH}">Sign in</a>"#)
    }
}

pub fn header(auth: &AuthContext) -> String {
    format!(
        r#"<header class="site-header">{}<nav><a href="/">Dashboard</a></nav>{}</header>"#,
        logo(),
        auth_button(auth)
    )
}

pub fn footer() -> String {
    footer_for_year(Utc::now().year())
}

pub fn footer_for_year(year: i32) -> String {
    format!(
        r#"<footer class="site-footer"><p>&copy; {year} Turing Biosciences. All rights reserved.</p></footer>"#
    )
}

/// Call to action shown in place of content that needs a signed-in user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInPrompt {
    pub title: String,
    pub message: String,
    pub button_text: String,
    pub href: String,
}

impl Default for SignInPrompt {
    fn default() -> Self {
        Self {
            title: "Sign in Required".to_string(),
            message: "Please sign in to access this page.".to_string(),
            button_text: "Sign In".to_string(),
            href: SIGN_IN_PATH.to_string(),
        }
    }
}

impl SignInPrompt {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_button_text(mut self, button_text: impl Into<String>) -> Self {
        self.button_text = button_text.into();
        self
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = href.into();
        self
    }

    pub fn render(&self) -> String {
        format!(
            r#"<section class="sign-in-prompt"><h2>{}</h2><p>{}</p><a class="auth-button auth-button--primary" href="{}">{}</a></section>"#,
            escape(&self.title),
            escape(&self.message),
            escape(&self.href),
            escape(&self.button_text)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_auth_button_loading_without_provider() {
        let html = auth_button(&AuthContext::default());
        assert!(html.contains("Loading…"));
        assert!(!html.contains("href"));
    }

    #[test]
    fn test_sign_in_prompt_defaults() {
        let html = SignInPrompt::default().render();

        assert!(html.contains("<h2>Sign in Required</h2>"));
        assert!(html.contains("Please sign in to access this page."));
        assert!(html.contains(r#"href="/api/logto/sign-in">Sign In</a>"#));
    }

    #[test]
    fn test_sign_in_prompt_overrides_are_escaped() {
        let html = SignInPrompt::default()
            .with_title("Members <only>")
            .with_message("Projects & datasets")
            .with_button_text("Continue")
            .with_href("/api/logto/sign-in?next=/projects")
            .render();

        assert!(html.contains("<h2>Members &lt;only&gt;</h2>"));
        assert!(html.contains("Projects &amp; datasets"));
        assert!(html.contains(r#"href="/api/logto/sign-in?next=/projects">Continue</a>"#));
        assert!(!html.contains("Sign in Required"));
    }

    #[test]
    fn test_footer() {
        let html = footer_for_year(2031);
        assert!(html.contains("&copy; 2031 Turing Biosciences. All rights reserved."));
        assert!(footer().contains(&Utc::now().year().to_string()));
    }

    #[test]
    fn test_header_contains_logo_and_button() {
        let html = header(&AuthContext::default());
        assert!(html.contains(r#"class="logo""#));
        assert!(html.contains("auth-button"));
    }
}
