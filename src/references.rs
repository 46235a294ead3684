use bevy::prelude::*;
use log::debug;

use crate::host::{HostLookup, TextTarget};
use crate::label::digits_format;

/// Everything a projection derives from the bar's fill and label handles.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedReferences {
    /// The fill entity, when it carries a [`FillImage`](crate::anchor_box::FillImage).
    pub fill_image: Option<Entity>,
    /// The anchor box the fill is laid out in.
    pub fill_container: Option<Entity>,
    pub label_text: Option<TextTarget>,
    pub digits_format: String,
}

impl Default for CachedReferences {
    fn default() -> Self {
        Self {
            fill_image: None,
            fill_container: None,
            label_text: None,
            digits_format: digits_format(2),
        }
    }
}

/// Handles after resolution. Invalid handles come back cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedHandles {
    pub fill: Option<Entity>,
    pub value_label: Option<Entity>,
}

impl CachedReferences {
    /// Resolves the fill and label handles of the bar on `owner`.
    ///
    /// A fill pointing at the bar itself counts as no fill. A label without
    /// a text component is dropped.
    pub fn resolve(
        &mut self,
        owner: Entity,
        fill: Option<Entity>,
        value_label: Option<Entity>,
        min_digits: usize,
        host: &impl HostLookup,
    ) -> ResolvedHandles {
        let fill = fill.filter(|fill| *fill != owner);
        match fill {
            Some(fill) => {
                self.fill_image = host.fill_image_kind(fill).map(|_| fill);
                self.fill_container = host.parent_box(fill);
                if self.fill_container.is_none() {
                    debug!("stat bar {owner}: fill {fill} has no parent box, fill is skipped");
                }
            }
            None => {
                self.fill_image = None;
                self.fill_container = None;
            }
        }

        let mut value_label = value_label;
        self.label_text = None;
        if let Some(label) = value_label {
            self.label_text = host.text_target(label);
            if self.label_text.is_none() {
                debug!("stat bar {owner}: label {label} has no text component, dropping it");
                value_label = None;
            }
            self.digits_format = digits_format(min_digits);
        }

        ResolvedHandles { fill, value_label }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor_box::FillImageKind;
    use crate::host::fake::FakeHost;

    const OWNER: Entity = Entity::from_raw(1);
    const AREA: Entity = Entity::from_raw(2);
    const FILL: Entity = Entity::from_raw(3);
    const LABEL: Entity = Entity::from_raw(4);

    fn host() -> FakeHost {
        let mut host = FakeHost::default();
        host.parents.insert(FILL, AREA);
        host.images.insert(FILL, FillImageKind::Simple);
        host.texts.insert(LABEL, TextTarget::Ui);
        host
    }

    #[test]
    fn resolves_fill_and_label() {
        let mut refs = CachedReferences::default();
        let handles = refs.resolve(OWNER, Some(FILL), Some(LABEL), 3, &host());

        assert_eq!(handles.fill, Some(FILL));
        assert_eq!(handles.value_label, Some(LABEL));
        assert_eq!(refs.fill_image, Some(FILL));
        assert_eq!(refs.fill_container, Some(AREA));
        assert_eq!(refs.label_text, Some(TextTarget::Ui));
        assert_eq!(refs.digits_format, "000");
    }

    #[test]
    fn fill_on_owner_counts_as_none() {
        let mut refs = CachedReferences::default();
        refs.resolve(OWNER, Some(FILL), None, 2, &host());
        let handles = refs.resolve(OWNER, Some(OWNER), None, 2, &host());

        assert_eq!(handles.fill, None);
        assert_eq!(refs.fill_image, None);
        assert_eq!(refs.fill_container, None);
    }

    #[test]
    fn orphan_fill_has_no_container() {
        let mut host = host();
        host.parents.clear();
        let mut refs = CachedReferences::default();
        let handles = refs.resolve(OWNER, Some(FILL), None, 2, &host);

        assert_eq!(handles.fill, Some(FILL));
        assert_eq!(refs.fill_image, Some(FILL));
        assert_eq!(refs.fill_container, None);
    }

    #[test]
    fn label_without_text_is_dropped() {
        let mut refs = CachedReferences::default();
        let handles = refs.resolve(OWNER, None, Some(AREA), 2, &host());

        assert_eq!(handles.value_label, None);
        assert_eq!(refs.label_text, None);
    }

    #[test]
    fn world_text_is_accepted() {
        let mut host = host();
        host.texts.insert(LABEL, TextTarget::World2d);
        let mut refs = CachedReferences::default();
        refs.resolve(OWNER, None, Some(LABEL), 1, &host);

        assert_eq!(refs.label_text, Some(TextTarget::World2d));
        assert_eq!(refs.digits_format, "0");
    }
}
