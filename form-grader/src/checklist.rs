//! The fixed grading checklist for the registration form.

/// Expectations for one labelled input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRequirement {
    /// Element id; the `name` attribute and the label's `for` must match it.
    pub id: &'static str,
    /// Human-readable prefix used in check names.
    pub title: &'static str,
    pub input_type: &'static str,
    pub tab_index: &'static str,
    /// Access key expected on the associated label.
    pub access_key: &'static str,
    /// Whether a non-empty `pattern` attribute is required.
    pub needs_pattern: bool,
}

/// Expectations for a form button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonRequirement {
    pub button_type: &'static str,
    pub title: &'static str,
    pub access_key: &'static str,
    pub tab_index: &'static str,
}

pub const FIELDS: [FieldRequirement; 5] = [
    FieldRequirement {
        id: "first-name",
        title: "First Name",
        input_type: "text",
        tab_index: "1",
        access_key: "f",
        needs_pattern: false,
    },
    FieldRequirement {
        id: "last-name",
        title: "Last Name",
        input_type: "text",
        tab_index: "2",
        access_key: "l",
        needs_pattern: false,
    },
    FieldRequirement {
        id: "email",
        title: "Email",
        input_type: "email",
        tab_index: "3",
        access_key: "e",
        needs_pattern: false,
    },
    FieldRequirement {
        id: "password",
        title: "Password",
        input_type: "password",
        tab_index: "4",
        access_key: "p",
        needs_pattern: true,
    },
    FieldRequirement {
        id: "confirm-password",
        title: "Confirm Password",
        input_type: "password",
        tab_index: "5",
        access_key: "c",
        needs_pattern: false,
    },
];

pub const SUBMIT_BUTTON: ButtonRequirement = ButtonRequirement {
    button_type: "submit",
    title: "Submit Button",
    access_key: "r",
    tab_index: "6",
};

pub const RESET_BUTTON: ButtonRequirement = ButtonRequirement {
    button_type: "reset",
    title: "Reset Button",
    access_key: "x",
    tab_index: "7",
};

/// Sorted tabindex values expected across the whole form.
pub const EXPECTED_TAB_ORDER: [i64; 7] = [1, 2, 3, 4, 5, 6, 7];

/// Minimum number of `label[for]` elements inside the form.
pub const MIN_ASSOCIATED_LABELS: usize = 5;

pub const FORM_ACTION: &str = "#";
pub const FORM_METHOD: &str = "POST";

/// Title printed in the report banner.
pub const REPORT_TITLE: &str = "User Registration Form - Lesson 7: Input Elements & Accessibility";
