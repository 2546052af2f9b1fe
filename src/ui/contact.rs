//! the contact page and its (simulated) message form
use {
    crate::{
        theme::palette::ColorRole,
        ui::text::{self, Block, Line, Span},
    },
    std::fmt,
    tracing::info,
};

/// a way to reach us
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactInfo {
    /// what kind of contact it is
    pub title: &'static str,
    /// the address/number
    pub value: &'static str,
    /// a link to it
    pub link: &'static str,
}

/// the contact information section
pub const CONTACT_INFO: [ContactInfo; 3] = [
    ContactInfo {
        title: "Email",
        value: "hello@themeapp.com",
        link: "mailto:hello@themeapp.com",
    },
    ContactInfo {
        title: "Phone",
        value: "+1 (555) 123-4567",
        link: "tel:+15551234567",
    },
    ContactInfo {
        title: "Address",
        value: "123 Design Street, Creative City, CC 12345",
        link: "#",
    },
];

/// the office hours, as (days, hours)
pub const OFFICE_HOURS: [(&str, &str); 3] = [
    ("Monday - Friday", "9:00 AM - 6:00 PM"),
    ("Saturday", "10:00 AM - 4:00 PM"),
    ("Sunday", "Closed"),
];

/// a field of the message form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    /// the sender's name
    Name,
    /// the sender's email address
    Email,
    /// what the message is about
    Subject,
    /// the message itself
    Message,
}

impl ContactField {
    /// every field, in form order
    pub const ALL: [ContactField; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// the field label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    /// the hint shown in an empty field
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Your name",
            Self::Email => "your@email.com",
            Self::Subject => "What's this about?",
            Self::Message => "Tell us more...",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// whether `email` looks like an email address
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace)
}

/// the message form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    /// the sender's name
    pub name: String,
    /// the sender's email address
    pub email: String,
    /// what the message is about
    pub subject: String,
    /// the message itself
    pub message: String,
    /// whether the last message went through
    pub submitted: bool,
}

impl ContactForm {
    /// the value of a field
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    /// set the value of a field
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();

        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    /// check every field, returns one message per problem
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        for field in ContactField::ALL {
            if self.get(field).trim().is_empty() {
                errors.push(format!("{} is required", field));
            }
        }

        if !self.email.trim().is_empty() && !is_valid_email(self.email.trim()) {
            errors.push(format!("{} must be a valid email address", ContactField::Email));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// "send" the message, nothing leaves the machine
    ///
    /// on success the fields are cleared and the form shows the confirmation
    pub fn submit(&mut self) -> Result<(), Vec<String>> {
        self.validate()?;

        info!(subject = %self.subject, "contact message accepted");
        *self = Self {
            submitted: true,
            ..Self::default()
        };

        Ok(())
    }

    /// go back to an empty form after the confirmation was shown
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// a section heading
fn heading(title: &str) -> Line {
    Line::from_span(Span::colored(title, ColorRole::Text).bold())
}

/// draw the contact page `width` columns wide
pub fn render(form: &ContactForm, width: usize) -> Block {
    let mut block = vec![heading("Get in Touch")];

    for line in text::wrap(
        "Have questions about our themes? Want to collaborate? We'd love to hear from you!",
        width,
    ) {
        block.push(Line::colored(line, ColorRole::TextSecondary));
    }

    block.push(Line::blank());

    let form_width = text::cell_width(2, width, 4);
    let info_width = width.saturating_sub(form_width + 4);

    block.extend(text::beside(
        render_form(form, form_width),
        form_width,
        render_info(info_width),
        4,
    ));

    block
}

/// the message form, or the confirmation after a submit
fn render_form(form: &ContactForm, width: usize) -> Block {
    let mut block = vec![heading("Send us a Message"), Line::blank()];

    if form.submitted {
        block.push(Line::from_span(
            Span::colored("✔ Message Sent!", ColorRole::Primary).bold(),
        ));

        for line in text::wrap(
            "Thank you for reaching out. We'll get back to you soon.",
            width,
        ) {
            block.push(Line::colored(line, ColorRole::TextSecondary));
        }

        return block;
    }

    for field in ContactField::ALL {
        let value = form.get(field);
        block.push(Line::colored(format!("{} *", field.label()), ColorRole::Text));

        let (shown, role) = if value.is_empty() {
            (field.placeholder(), ColorRole::TextSecondary)
        } else {
            (value, ColorRole::Text)
        };

        block.push(
            Line::from_span(Span::colored(
                format!(" {}", text::truncate(shown, width.saturating_sub(2))),
                role,
            ))
            .pad_to(width),
        );
        block.push(Line::blank());
    }

    block.push(Line::from_span(
        Span::colored("[ Send Message ]", ColorRole::Primary).bold(),
    ));

    block
}

/// contact information and office hours
fn render_info(width: usize) -> Block {
    let mut block = vec![heading("Contact Information"), Line::blank()];

    for info in CONTACT_INFO {
        block.push(Line::colored(info.title, ColorRole::Text));
        block.push(Line::colored(
            format!("  {}", text::truncate(info.value, width.saturating_sub(2))),
            ColorRole::TextSecondary,
        ));
    }

    block.push(Line::blank());
    block.push(heading("Office Hours"));

    for (days, hours) in OFFICE_HOURS {
        let pad = width.saturating_sub(days.len() + hours.len()).max(1);
        block.push(
            Line::colored(days, ColorRole::TextSecondary)
                .with(Span::plain(" ".repeat(pad)))
                .with(Span::colored(hours, ColorRole::Text)),
        );
    }

    block
}
