#![allow(clippy::result_large_err)]

use crate::core::error::AppError;
use crate::core::publishers::registry::{PublisherRegistry, PUBLISHER_NAMESPACE};
use crate::core::publishers::{Action, Diagnostics};
use crate::core::xml::XmlElement;
use tracing::debug;

/// Compile `actions` in order, appending one fragment per action to `parent`.
///
/// Fragments are staged and only moved onto `parent` once every action has
/// compiled, so a failed compilation leaves `parent` untouched. Warnings
/// raised before a failure stay in `diagnostics`.
pub fn compile_actions(
    registry: &PublisherRegistry,
    actions: &[Action],
    parent: &mut XmlElement,
    diagnostics: &mut Diagnostics,
) -> Result<(), AppError> {
    let mut staging = XmlElement::new(parent.tag());
    for (index, action) in actions.iter().enumerate() {
        let publisher = registry.get(&action.name).ok_or_else(|| {
            AppError::unknown_action(&action.name, PUBLISHER_NAMESPACE)
                .with_entry("index", index.to_string())
        })?;
        debug!(action = %action.name, index, "compiling publisher");
        publisher
            .compile(&mut staging, &action.config, diagnostics)
            .map_err(|err| err.with_entry("index", index.to_string()))?;
    }
    parent.extend_children(staging.take_children());
    Ok(())
}

/// Build the `<publishers>` section of a job from its action list.
pub fn compile_publishers(
    registry: &PublisherRegistry,
    actions: &[Action],
    diagnostics: &mut Diagnostics,
) -> Result<XmlElement, AppError> {
    let mut publishers = XmlElement::new(PUBLISHER_NAMESPACE);
    compile_actions(registry, actions, &mut publishers, diagnostics)?;
    Ok(publishers)
}
