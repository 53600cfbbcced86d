#![cfg(test)]
//! The desktop build inlines `ui/assets/theme/main.css`; a broken path or a
//! truncated file would only show up as unstyled UI at runtime.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(
        !EMBEDDED_CSS.trim().is_empty(),
        "embedded theme is empty"
    );
}

#[test]
fn embedded_css_contains_expected_tokens() {
    for token in ["--color-bg", "--font-sans", "body {", ".button--primary", ".map__panels"] {
        assert!(
            EMBEDDED_CSS.contains(token),
            "expected token `{token}` missing from embedded CSS"
        );
    }
}

#[test]
fn font_stack_prefers_korean_faces() {
    let stack = EMBEDDED_CSS
        .lines()
        .skip_while(|line| !line.contains("--font-sans"))
        .take(3)
        .collect::<String>();
    assert!(stack.contains("NanumGothic"), "font stack: {stack}");
}
