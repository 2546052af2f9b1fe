//! the about page
use crate::{
    theme::palette::ColorRole,
    ui::text::{self, Block, Line, Span},
};

/// a value listed on the about page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Value {
    /// the value
    pub title: &'static str,
    /// what it means to us
    pub description: &'static str,
}

/// the values section
pub const VALUES: [Value; 4] = [
    Value {
        title: "User-Centric",
        description: "We prioritize user experience in every design decision",
    },
    Value {
        title: "Innovation",
        description: "Constantly pushing boundaries with cutting-edge technology",
    },
    Value {
        title: "Excellence",
        description: "Committed to delivering the highest quality products",
    },
    Value {
        title: "Passion",
        description: "Driven by our love for creating beautiful experiences",
    },
];

/// the line under the page heading
const INTRO: &str = "We're passionate about creating beautiful, functional, and accessible web experiences. Our multi-theme approach demonstrates the power of modern React development with TypeScript, responsive design, and seamless user interactions.";

/// the paragraphs of our story
const STORY: [&str; 2] = [
    "Founded with the vision of making web applications more dynamic and engaging, ThemeApp represents the future of user-customizable interfaces. We believe that users should have the power to personalize their digital experiences.",
    "Our team combines expertise in modern web technologies with a deep understanding of user experience design. Every theme, animation, and interaction is carefully crafted to provide both beauty and functionality.",
];

/// the mission statement
const MISSION: &str = "To empower developers and users with flexible, beautiful, and accessible web applications that adapt to individual preferences and needs. We're building the future of personalized digital experiences, one theme at a time.";

/// a section heading
fn heading(title: &str) -> Line {
    Line::from_span(Span::colored(title, ColorRole::Text).bold())
}

/// wrap `body` onto the end of `block`
fn paragraph(block: &mut Block, body: &str, width: usize) {
    for line in text::wrap(body, width) {
        block.push(Line::colored(line, ColorRole::TextSecondary));
    }
}

/// draw the about page `width` columns wide
pub fn render(width: usize) -> Block {
    let mut block = vec![heading("About ThemeApp")];
    paragraph(&mut block, INTRO, width);

    block.push(Line::blank());
    block.push(heading("Our Story"));
    for body in STORY {
        paragraph(&mut block, body, width);
        block.push(Line::blank());
    }

    block.push(heading("Our Values"));
    block.push(Line::blank());

    let columns = 2;
    let cell = text::cell_width(columns, width, 2);
    let values = VALUES
        .iter()
        .map(|value| {
            let mut card = vec![Line::from_span(
                Span::colored(value.title, ColorRole::Primary).bold(),
            )];
            paragraph(&mut card, value.description, cell);
            card
        })
        .collect();
    block.extend(text::grid(values, columns, width, 2));

    block.push(Line::blank());
    block.push(heading("Our Mission"));
    paragraph(&mut block, MISSION, width);
    block.push(Line::blank());
    block.push(Line::from_span(
        Span::colored("[ Join Our Journey ]", ColorRole::Primary).bold(),
    ));

    block
}
