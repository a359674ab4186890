//! Token balance display.

use yew::prelude::*;

/// Properties for TokenBadge component.
#[derive(Properties, PartialEq)]
pub struct TokenBadgeProps {
    /// `None` when no profile snapshot is cached
    pub tokens: Option<u64>,
    pub label: AttrValue,
}

#[function_component(TokenBadge)]
pub fn token_badge(props: &TokenBadgeProps) -> Html {
    let value = props
        .tokens
        .map(format_tokens)
        .unwrap_or_else(|| "-".to_string());

    html! {
        <div class="card stat-card">
            <div class="stat-value">{ value }</div>
            <div class="stat-label">{ &props.label }</div>
        </div>
    }
}

/// Group digits in threes: `12500` becomes `12,500`.
pub fn format_tokens(tokens: u64) -> String {
    let digits = tokens.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
