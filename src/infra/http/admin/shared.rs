use std::time::Duration;

use askama::{Error as AskamaError, Template};
use datastar::prelude::ElementPatchMode;
use uuid::Uuid;

use super::selectors::TOAST_STACK;
use crate::{
    application::{error::HttpError, stream::StreamBuilder},
    domain::error::DomainError,
    presentation::{admin::views as admin_views, views::TemplateRenderError},
};

#[derive(Clone)]
pub(super) struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub text: String,
    pub ttl: Duration,
}

#[derive(Clone, Copy)]
pub(super) enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn as_variant(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

const DEFAULT_TOAST_TTL: Duration = Duration::from_millis(6000);

impl Toast {
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, text)
    }

    fn new(kind: ToastKind, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            text: text.into(),
            ttl: DEFAULT_TOAST_TTL,
        }
    }
}

pub(super) fn push_toasts(stream: &mut StreamBuilder, toasts: &[Toast]) -> Result<(), HttpError> {
    let view_items = toasts
        .iter()
        .map(|toast| admin_views::AdminToastItem {
            id: toast.id.to_string(),
            kind: toast.kind.as_variant(),
            text: toast.text.clone(),
            ttl_ms: toast.ttl.as_millis() as u64,
        })
        .collect::<Vec<_>>();

    let template = admin_views::AdminToastStackTemplate { toasts: view_items };

    let html = template.render().map_err(|err| {
        template_render_http_error(
            "infra::http::admin::push_toasts",
            "Template rendering failed",
            err,
        )
    })?;

    stream.push_patch(html, TOAST_STACK, ElementPatchMode::Replace);
    Ok(())
}

pub(super) fn datastar_replace(selector: &str, html: String) -> StreamBuilder {
    let mut stream = StreamBuilder::new();
    stream.push_patch(html, selector, ElementPatchMode::Replace);
    stream
}

/// JSON payload setting a single boolean signal.
pub(super) fn bool_signal(name: &str, value: bool) -> String {
    serde_json::json!({ name: value }).to_string()
}

pub(super) fn template_render_http_error(
    source: &'static str,
    message: &'static str,
    err: AskamaError,
) -> HttpError {
    HttpError::from(TemplateRenderError::new(source, message, err))
}

/// Parse an optional 1-based page number; blank values mean "no page requested".
pub(super) fn parse_page(source: &'static str, value: Option<&str>) -> Result<Option<usize>, HttpError> {
    let Some(raw) = value.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(None);
    };

    raw.parse::<usize>().map(Some).map_err(|_| {
        HttpError::from_domain(
            source,
            DomainError::validation(format!("page `{raw}` is not a page number")),
        )
    })
}

pub(super) fn blank_to_none(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn page_numbers_parse_or_fail_with_bad_request() {
        assert_eq!(parse_page("test", None).unwrap(), None);
        assert_eq!(parse_page("test", Some(" ")).unwrap(), None);
        assert_eq!(parse_page("test", Some("3")).unwrap(), Some(3));

        let err = parse_page("test", Some("three")).expect_err("not a number");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn signals_are_single_key_objects() {
        assert_eq!(
            bool_signal("registrationSucceeded", true),
            r#"{"registrationSucceeded":true}"#
        );
    }

    #[test]
    fn blank_values_become_none() {
        assert_eq!(blank_to_none(Some("  ".into())), None);
        assert_eq!(blank_to_none(Some(" a@b.c ".into())).as_deref(), Some("a@b.c"));
    }
}
