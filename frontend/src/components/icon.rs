use yew::prelude::*;

/// Icon packages keyed by the two-letter prefix of an icon name, mapped to the
/// class prefix of the icon font that provides them.
const ICON_PACKAGES: &[(&str, &str)] = &[("Ri", "ri")];

/// Translates a component-style icon name into its icon-font class.
///
/// `RiArrowRightLine` becomes `ri-arrow-right-line` and `RiSettings3Line`
/// becomes `ri-settings-3-line`. Names with an unknown prefix yield `None`.
pub fn icon_class(name: &str) -> Option<String> {
    let prefix = name.get(..2)?;
    let (_, css_prefix) = ICON_PACKAGES.iter().find(|(known, _)| *known == prefix)?;
    let rest = &name[2..];
    if rest.is_empty() || !rest.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }

    let mut class = String::with_capacity(name.len() + 4);
    class.push_str(css_prefix);
    let mut prev_digit = false;
    for ch in rest.chars() {
        if ch.is_ascii_uppercase() {
            class.push('-');
            class.push(ch.to_ascii_lowercase());
        } else if ch.is_ascii_digit() && !prev_digit {
            class.push('-');
            class.push(ch);
        } else {
            class.push(ch);
        }
        prev_digit = ch.is_ascii_digit();
    }
    Some(class)
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub name: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
}

#[function_component]
pub fn Icon(props: &IconProps) -> Html {
    let icon = use_memo(props.name.clone(), |name| icon_class(name));
    let Some(icon) = (*icon).clone() else {
        return html! {};
    };
    let style = props.onclick.is_some().then_some("cursor: pointer;");

    html! {
        <i
            class={classes!(icon, props.class.clone())}
            style={style}
            onclick={props.onclick.clone()}
            aria-hidden="true"
        ></i>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remix_names_map_to_font_classes() {
        assert_eq!(icon_class("RiPlayFill").as_deref(), Some("ri-play-fill"));
        assert_eq!(icon_class("RiArrowRightUpLine").as_deref(), Some("ri-arrow-right-up-line"));
        assert_eq!(icon_class("RiSettings3Line").as_deref(), Some("ri-settings-3-line"));
        assert_eq!(icon_class("RiHdLine").as_deref(), Some("ri-hd-line"));
    }

    #[test]
    fn unknown_or_malformed_names_render_nothing() {
        assert_eq!(icon_class(""), None);
        assert_eq!(icon_class("Ri"), None);
        assert_eq!(icon_class("FaHome"), None);
        assert_eq!(icon_class("Ri<script>"), None);
        assert_eq!(icon_class("é"), None);
    }
}
