//! Built-in demo deck, shown when no deck file is given

use deck_core::{Block, Deck, DeckSettings, Slide, SlideSequence};

fn bullets(items: &[&str]) -> Block {
    Block::Bullets(items.iter().map(|item| item.to_string()).collect())
}

/// The eight-slide "AI in Coverage Banking" deck
pub fn demo_deck() -> Deck {
    let slides: SlideSequence = vec![
        Slide::new("AI in Coverage Banking")
            .with_block(Block::Heading("Enhancing relationships with intelligent tooling".into()))
            .with_block(Block::Text("X Bank Coverage Team, strategy discussion".into()))
            .with_notes(
                "Welcome everyone. I'm excited to share insights on AI integration for our Coverage team.",
            ),
        Slide::new("Market Landscape")
            .with_block(bullets(&[
                "AI adoption is accelerating across investment banking",
                "Peers are piloting research, drafting and CRM assistants",
                "Clients expect faster, better-informed coverage",
            ]))
            .with_notes(
                "The data shows AI adoption is accelerating across investment banking. The Bank has strong foundations to build on.",
            ),
        Slide::new("Workflow Integration")
            .with_block(Block::Heading("Augment, don't replace".into()))
            .with_block(bullets(&[
                "Meeting preparation and company briefs",
                "Pitch book first drafts",
                "Relationship insights from CRM history",
            ]))
            .with_notes(
                "Here's how AI can enhance our existing workflow without replacing human judgment and relationships.",
            ),
        Slide::new("Time Savings")
            .with_block(bullets(&[
                "Briefing packs: hours down to minutes",
                "Comparable company screens generated on demand",
                "More time with clients, less time formatting",
            ]))
            .with_notes(
                "These time savings translate directly to revenue opportunities and competitive advantages.",
            ),
        Slide::new("Peer Case Studies")
            .with_block(bullets(&[
                "Research summarisation rolled out to coverage bankers",
                "Drafting assistants embedded in document tooling",
                "Client signal alerts driven by news and filings",
            ]))
            .with_notes(
                "Real examples from peer institutions show the practical benefits we can achieve.",
            ),
        Slide::new("Return on Investment")
            .with_block(Block::Text(
                "Conservative assumptions still cover implementation and licensing costs within the first year.".into(),
            ))
            .with_notes(
                "Conservative estimates show significant ROI potential with manageable implementation costs.",
            ),
        Slide::new("Implementation Roadmap")
            .with_block(bullets(&[
                "Phase 1: pilot with a single sector team",
                "Phase 2: extend to all coverage groups",
                "Phase 3: integrate with CRM and deal systems",
            ]))
            .with_notes(
                "Proposed phased approach allows us to learn and scale systematically.",
            ),
        Slide::new("Questions & Discussion")
            .with_block(Block::Text("Thank you".into()))
            .with_notes(
                "Thank you for your time. I'd welcome your feedback and insights on these proposals.",
            ),
    ]
    .into_iter()
    .collect();

    Deck {
        title: Some("X Bank AI Presentation".to_string()),
        settings: DeckSettings {
            show_progress_dots: true,
            ..Default::default()
        },
        slides,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::{validate_slides, DeckState};

    #[test]
    fn test_demo_deck_shape() {
        let deck = demo_deck();
        assert_eq!(deck.slides.len(), 8);
        assert_eq!(deck.slides.title(2), "Workflow Integration");
        assert!(deck.slides.notes(7).starts_with("Thank you"));
        assert!(validate_slides(deck.slides.as_slice(), &deck.settings).is_empty());
    }

    #[test]
    fn test_demo_deck_announcement() {
        let state = DeckState::new(demo_deck(), None).unwrap();
        state.navigator.go_to(2);
        assert_eq!(
            state.navigator.context().announcement,
            "Workflow Integration. Slide 3 of 8"
        );
    }
}
