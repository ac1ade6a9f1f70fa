//! Acknowledgements shown instead of submitting the site's static forms.

/// Where a submitted form sits in the page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormTraits {
    /// Form has the `newsletter-form` class
    pub newsletter: bool,
    pub in_home_contact: bool,
    pub in_home_enroll: bool,
    pub in_contact_page: bool,
    pub in_enroll_page: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Newsletter,
    HomeContact,
    HomeEnroll,
    ContactPage,
    EnrollPage,
}

impl FormKind {
    /// First matching kind wins; `None` lets the form submit normally.
    pub fn classify(traits: &FormTraits) -> Option<Self> {
        if traits.newsletter {
            Some(FormKind::Newsletter)
        } else if traits.in_home_contact {
            Some(FormKind::HomeContact)
        } else if traits.in_home_enroll {
            Some(FormKind::HomeEnroll)
        } else if traits.in_contact_page {
            Some(FormKind::ContactPage)
        } else if traits.in_enroll_page {
            Some(FormKind::EnrollPage)
        } else {
            None
        }
    }

    pub fn acknowledgement(&self) -> &'static str {
        match self {
            FormKind::Newsletter => "Thank you for subscribing!",
            FormKind::HomeContact => "Thank you! We will get back to you.",
            FormKind::HomeEnroll | FormKind::EnrollPage => "Application submitted!",
            FormKind::ContactPage => "Message sent!",
        }
    }

    /// Whether the form is cleared after acknowledging
    pub fn resets(&self) -> bool {
        matches!(self, FormKind::Newsletter)
    }
}
