// In: src/bridge/attacher.rs

//! The bridge factory and its registration-time half.
//!
//! `bridge()` performs all configuration validation synchronously, before any
//! pipeline is touched; the `Attacher` it returns performs the second eager
//! check, that a destination was actually supplied, when the origin processor
//! registers it. Only after both checks pass does a runtime `Transformer`
//! exist at all.

use std::rc::Rc;

use crate::bridge::config::{BridgeConfig, EnterFn, ExitFn};
use crate::bridge::transformer::Transformer;
use crate::document::Document;
use crate::error::TextloomError;
use crate::pipeline::{Plugin, Processor, StepFn};
use crate::types::SharedNode;

/// Validates `config` and returns the plugin that attaches the bridge to an
/// origin processor.
///
/// Fails synchronously with a configuration error when `name` is empty or the
/// `enter` mutator is absent. No side effects beyond validation.
pub fn bridge(config: BridgeConfig) -> Result<Attacher, TextloomError> {
    if config.name.is_empty() {
        return Err(TextloomError::InvalidBridgeName(config.name));
    }

    let BridgeConfig { name, enter, exit } = config;
    let enter = enter.ok_or_else(|| TextloomError::MissingEnter(name.clone()))?;

    Ok(Attacher { name, enter, exit })
}

/// The registration-time half of a bridge.
///
/// Holds the validated configuration and waits for the origin processor's own
/// registration mechanism (`Processor::plug`) to supply the origin handle and
/// the destination companion.
pub struct Attacher {
    pub(crate) name: String,
    pub(crate) enter: EnterFn,
    pub(crate) exit: Option<ExitFn>,
}

impl Attacher {
    /// Builds the runtime transformer directly, outside of `Processor::plug`.
    ///
    /// Exposed so hosts with their own registration machinery can still obtain
    /// the transform step; `Plugin::attach` goes through this as well.
    pub fn into_transformer(
        self,
        origin: &Processor,
        destination: Option<Processor>,
    ) -> Result<Transformer, TextloomError> {
        // The destination must exist at registration time: a misconfigured
        // bridge fails before the origin pipeline ever runs a document.
        let destination =
            destination.ok_or_else(|| TextloomError::MissingDestination(self.name.clone()))?;

        Ok(Transformer::new(
            self.name,
            self.enter,
            self.exit,
            origin.clone(),
            destination,
        ))
    }
}

impl Plugin for Attacher {
    fn attach(
        self,
        origin: &Processor,
        companion: Option<Processor>,
    ) -> Result<Rc<StepFn>, TextloomError> {
        let transformer = Rc::new(self.into_transformer(origin, companion)?);
        let step: Rc<StepFn> = Rc::new(move |node: &SharedNode, document: &mut Document| {
            transformer.run(node, document)
        });
        Ok(step)
    }
}

//==================================================================================
// Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Node;

    fn valid_config() -> BridgeConfig {
        BridgeConfig::new("fine", |_origin, _destination, _document, _node| {
            Ok(Node::new("root").into_shared())
        })
    }

    #[test]
    fn test_bridge_rejects_empty_name() {
        let config = BridgeConfig {
            name: String::new(),
            enter: valid_config().enter,
            exit: None,
        };

        let result = bridge(config);
        assert!(matches!(result, Err(TextloomError::InvalidBridgeName(_))));
    }

    #[test]
    fn test_bridge_rejects_missing_enter() {
        let config = BridgeConfig {
            name: "fine".into(),
            enter: None,
            exit: None,
        };

        let result = bridge(config);
        assert!(
            matches!(result, Err(TextloomError::MissingEnter(ref name)) if name == "fine"),
            "error should name the offending bridge"
        );
    }

    #[test]
    fn test_attach_rejects_missing_destination() {
        let attacher = bridge(valid_config()).unwrap();
        let origin = Processor::new();

        let result = attacher.into_transformer(&origin, None);
        assert!(
            matches!(result, Err(TextloomError::MissingDestination(ref name)) if name == "fine")
        );
    }

    #[test]
    fn test_plug_rejects_missing_destination_at_registration() {
        let attacher = bridge(valid_config()).unwrap();

        // The failure happens while wiring the processor, not on first run.
        let result = Processor::new().plug(attacher, None);
        assert!(matches!(result, Err(TextloomError::MissingDestination(_))));
    }

    #[test]
    fn test_valid_config_attaches_one_step() {
        let attacher = bridge(valid_config()).unwrap();

        let origin = Processor::new()
            .plug(attacher, Some(Processor::new()))
            .unwrap();
        assert_eq!(origin.len(), 1);
    }
}
