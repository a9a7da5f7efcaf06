//! Filtering of heterogeneous part lists by kind

use strum::{AsRefStr, Display, EnumString};

use crate::protocol::google::GooglePart;
use crate::types::ContentPart;

/// Discriminating key of a part
///
/// Parses from and prints as the key the provider uses on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum PartKind {
    /// `text`
    Text,
    /// `inlineData`
    InlineData,
    /// `functionCall`
    FunctionCall,
    /// `functionResponse`
    FunctionResponse,
}

/// Anything that carries a part kind
pub trait Tagged {
    /// Kind of this part, `None` when the part is not one this layer knows
    fn kind(&self) -> Option<PartKind>;
}

impl Tagged for GooglePart {
    fn kind(&self) -> Option<PartKind> {
        match self {
            Self::Text(_) => Some(PartKind::Text),
            Self::InlineData(_) => Some(PartKind::InlineData),
            Self::FunctionCall(_) => Some(PartKind::FunctionCall),
            Self::FunctionResponse(_) => Some(PartKind::FunctionResponse),
            Self::Other(_) => None,
        }
    }
}

impl Tagged for ContentPart {
    fn kind(&self) -> Option<PartKind> {
        match self {
            Self::Text { .. } => Some(PartKind::Text),
        }
    }
}

impl<T: Tagged + ?Sized> Tagged for &T {
    fn kind(&self) -> Option<PartKind> {
        (**self).kind()
    }
}

/// Keep the parts whose kind is in `kinds`, preserving order
///
/// Accepts owned parts or references. Duplicates in `kinds` are irrelevant;
/// an empty `kinds` selects nothing.
pub fn select_parts<I>(parts: I, kinds: &[PartKind]) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Tagged,
{
    parts
        .into_iter()
        .filter(|part| part.kind().is_some_and(|kind| kinds.contains(&kind)))
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::protocol::google::{GoogleFunctionCall, GoogleInlineData};

    fn mixed_parts() -> Vec<GooglePart> {
        vec![
            GooglePart::Text("first".to_owned()),
            GooglePart::FunctionCall(GoogleFunctionCall {
                id: None,
                name: "lookup".to_owned(),
                args: json!({}),
            }),
            GooglePart::InlineData(GoogleInlineData {
                mime_type: "image/png".to_owned(),
                data: "AAAA".to_owned(),
            }),
            GooglePart::Text("second".to_owned()),
            GooglePart::Other(serde_json::Map::new()),
        ]
    }

    #[test]
    fn selects_matching_kinds_in_order() {
        let parts = mixed_parts();
        let selected = select_parts(&parts, &[PartKind::Text]);
        assert_eq!(selected, vec![&parts[0], &parts[3]]);
    }

    #[test]
    fn kind_set_order_and_duplicates_do_not_matter() {
        let parts = mixed_parts();
        let a = select_parts(&parts, &[PartKind::FunctionCall, PartKind::Text]);
        let b = select_parts(&parts, &[PartKind::Text, PartKind::FunctionCall, PartKind::Text]);
        assert_eq!(a, b);
        assert_eq!(a, vec![&parts[0], &parts[1], &parts[3]]);
    }

    #[test]
    fn empty_inputs_select_nothing() {
        assert!(select_parts(&mixed_parts(), &[]).is_empty());
        assert!(select_parts(Vec::<GooglePart>::new(), &[PartKind::Text]).is_empty());
    }

    #[test]
    fn selection_is_idempotent() {
        let kinds = [PartKind::Text, PartKind::InlineData];
        let once = select_parts(mixed_parts(), &kinds);
        let twice = select_parts(once.clone(), &kinds);
        assert_eq!(once, twice);
    }

    #[test]
    fn selecting_every_present_kind_is_identity() {
        let parts: Vec<GooglePart> = mixed_parts().into_iter().filter(|p| p.kind().is_some()).collect();
        let kinds = [PartKind::Text, PartKind::FunctionCall, PartKind::InlineData];
        assert_eq!(select_parts(parts.clone(), &kinds), parts);
    }

    #[test]
    fn unknown_parts_are_never_selected() {
        let all = [
            PartKind::Text,
            PartKind::InlineData,
            PartKind::FunctionCall,
            PartKind::FunctionResponse,
        ];
        let selected = select_parts(mixed_parts(), &all);
        assert_eq!(selected.len(), 4);
    }

    #[test]
    fn works_over_content_parts() {
        let parts = vec![ContentPart::text("a"), ContentPart::text("b")];
        assert_eq!(select_parts(&parts, &[PartKind::Text]).len(), 2);
        assert!(select_parts(&parts, &[PartKind::FunctionCall]).is_empty());
    }

    #[test]
    fn kind_tags_match_wire_keys() {
        assert_eq!(PartKind::FunctionCall.as_ref(), "functionCall");
        assert_eq!(PartKind::InlineData.to_string(), "inlineData");
        assert_eq!("functionResponse".parse::<PartKind>().unwrap(), PartKind::FunctionResponse);
        assert!("thought".parse::<PartKind>().is_err());
    }
}
