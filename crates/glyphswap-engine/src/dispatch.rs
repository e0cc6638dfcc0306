// Dispatch requests: the transport-facing boundary of the registry

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use glyphswap_core::{EncoderKey, EncoderOptions};

use crate::lifecycle::{EncoderSlot, LifecycleStatus};
use crate::registry::Registry;

/// A request addressed to one encoder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum DispatchRequest {
    CanHandle {
        encoder: EncoderKey,
        word: String,
        #[serde(default)]
        options: EncoderOptions,
    },
    Transform {
        encoder: EncoderKey,
        word: String,
        #[serde(default)]
        options: EncoderOptions,
    },
    Info {
        encoder: EncoderKey,
    },
}

impl DispatchRequest {
    pub fn encoder(&self) -> EncoderKey {
        match self {
            DispatchRequest::CanHandle { encoder, .. }
            | DispatchRequest::Transform { encoder, .. }
            | DispatchRequest::Info { encoder } => *encoder,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum DispatchResponse {
    CanHandle {
        can_handle: bool,
    },
    /// Markup of the swapped word, or `None` when no swap was produced.
    Text {
        text: Option<String>,
    },
    Info {
        title: String,
        description: String,
        neglectable: bool,
    },
}

/// Whether an option record may be handed to an encoder.
fn options_match(key: EncoderKey, options: &EncoderOptions) -> bool {
    matches!(
        (key, options),
        (_, EncoderOptions::None)
            | (EncoderKey::Braille, EncoderOptions::Braille(_))
            | (EncoderKey::Phonetic, EncoderOptions::Phonetic(_))
            | (EncoderKey::TrueKana, EncoderOptions::TrueKana(_))
            | (EncoderKey::Cockney, EncoderOptions::Cockney(_))
    )
}

impl Registry {
    /// Answer a dispatch request. Never fails: a failed encoder answers
    /// `false` or no text.
    pub async fn dispatch(&self, request: DispatchRequest) -> DispatchResponse {
        match request {
            DispatchRequest::Info { encoder } => {
                let slot = self.slot(encoder);
                DispatchResponse::Info {
                    title: slot.title().to_string(),
                    description: slot.description().to_string(),
                    neglectable: slot.is_neglectable(),
                }
            }
            DispatchRequest::CanHandle {
                encoder,
                word,
                options,
            } => {
                let slot = self.dispatch_slot(encoder, &options).await;
                DispatchResponse::CanHandle {
                    can_handle: slot.can_handle(&word, &options).await,
                }
            }
            DispatchRequest::Transform {
                encoder,
                word,
                options,
            } => {
                let slot = self.dispatch_slot(encoder, &options).await;
                let swap = slot.transform(&word, &options).await;
                DispatchResponse::Text {
                    text: swap.map(|s| s.markup()),
                }
            }
        }
    }

    async fn dispatch_slot(&self, key: EncoderKey, options: &EncoderOptions) -> Rc<EncoderSlot> {
        let slot = self.get(key).await;
        if slot.status() == LifecycleStatus::Failed {
            log::warn!("dispatch: {key} failed to load; answering with no result");
        }
        if !options_match(key, options) {
            log::warn!("dispatch: {key} ignores options {options:?}");
        }
        slot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use glyphswap_core::options::{BrailleGrade, BrailleOptions};
    use serde_json::json;

    use crate::loader::InMemoryLoader;

    fn registry() -> Registry {
        Registry::new(Rc::new(InMemoryLoader::new()))
    }

    #[test]
    fn requests_parse_from_json() {
        let request: DispatchRequest = serde_json::from_value(json!({
            "type": "transform",
            "encoder": "braille",
            "word": "and",
            "options": {"kind": "braille", "grade": "two"}
        }))
        .unwrap();
        assert_eq!(
            request,
            DispatchRequest::Transform {
                encoder: EncoderKey::Braille,
                word: "and".into(),
                options: EncoderOptions::Braille(BrailleOptions {
                    grade: BrailleGrade::Two
                }),
            }
        );

        let request: DispatchRequest =
            serde_json::from_str(r#"{"type":"can-handle","encoder":"morse","word":"sos"}"#)
                .unwrap();
        assert_eq!(request.encoder(), EncoderKey::Morse);
    }

    #[test]
    fn responses_serialize_tagged() {
        let response = DispatchResponse::CanHandle { can_handle: true };
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"type":"can-handle","can_handle":true}"#
        );
        let response = DispatchResponse::Text { text: None };
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"type":"text","text":null}"#
        );
    }

    #[tokio::test]
    async fn transform_returns_markup() {
        let response = registry()
            .dispatch(DispatchRequest::Transform {
                encoder: EncoderKey::Morse,
                word: "sos".into(),
                options: EncoderOptions::None,
            })
            .await;
        let DispatchResponse::Text { text: Some(text) } = response else {
            panic!("expected text, got {response:?}");
        };
        assert!(text.contains("data-glyphswap-original=\"sos\""));
        assert!(text.contains("... --- ..."));
    }

    #[tokio::test]
    async fn failed_encoder_answers_false() {
        let registry = registry();
        let response = registry
            .dispatch(DispatchRequest::CanHandle {
                encoder: EncoderKey::Katakana,
                word: "hello".into(),
                options: EncoderOptions::None,
            })
            .await;
        assert_eq!(response, DispatchResponse::CanHandle { can_handle: false });
        let response = registry
            .dispatch(DispatchRequest::Transform {
                encoder: EncoderKey::Katakana,
                word: "hello".into(),
                options: EncoderOptions::None,
            })
            .await;
        assert_eq!(response, DispatchResponse::Text { text: None });
    }

    #[tokio::test]
    async fn info_does_not_load() {
        let registry = registry();
        let response = registry
            .dispatch(DispatchRequest::Info {
                encoder: EncoderKey::Cockney,
            })
            .await;
        assert_eq!(
            response,
            DispatchResponse::Info {
                title: "Cockney".into(),
                description: "Converts English words to Cockney rhyming slang".into(),
                neglectable: true,
            }
        );
        assert_eq!(
            registry.peek(EncoderKey::Cockney).map(|s| s.status()),
            Some(LifecycleStatus::Uninitialized)
        );
    }

    #[test]
    fn option_variants_match_their_encoder() {
        let braille = EncoderOptions::Braille(BrailleOptions::default());
        assert!(options_match(EncoderKey::Braille, &braille));
        assert!(!options_match(EncoderKey::Morse, &braille));
        assert!(options_match(EncoderKey::Morse, &EncoderOptions::None));
    }
}
