//! Query handlers for the transport context.
//!
//! Read-only views over the destination directory.

use serde::Serialize;

use crate::domain::destination::DestinationRegistry;

/// One button on the booth's panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonView {
    /// Button number.
    pub ordinal: usize,
    /// Destination label.
    pub label: String,
}

/// Lists the buttons in ordinal order.
#[must_use]
pub fn list_buttons(registry: &DestinationRegistry) -> Vec<ButtonView> {
    registry
        .iter()
        .map(|destination| ButtonView {
            ordinal: destination.ordinal(),
            label: destination.label().to_owned(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_destinations;
    use crate::domain::destination::DestinationEntry;

    #[test]
    fn test_list_buttons_follows_ordinals() {
        // Arrange
        let registry = DestinationRegistry::build(vec![
            DestinationEntry::new("Simpsons", 2, "loc:simpsons"),
            DestinationEntry::new("Marvel", 1, "loc:marvel"),
        ])
        .unwrap();

        // Act
        let buttons = list_buttons(&registry);

        // Assert
        assert_eq!(
            buttons,
            vec![
                ButtonView {
                    ordinal: 1,
                    label: "Marvel".to_owned()
                },
                ButtonView {
                    ordinal: 2,
                    label: "Simpsons".to_owned()
                },
            ]
        );
    }

    #[test]
    fn test_default_panel_has_nine_buttons() {
        let registry = DestinationRegistry::build(default_destinations()).unwrap();

        let buttons = list_buttons(&registry);

        assert_eq!(buttons.len(), 9);
        assert_eq!(buttons[3].label, "Sesame");
        assert_eq!(buttons[4].label, "Gotham");
    }
}
