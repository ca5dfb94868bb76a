//! The built-in FluentMind challenge set.
//!
//! Nine reading and six watching challenges across three difficulty levels.
//! The set is data, not logic: nothing else in the crate depends on its
//! contents, and consumers may inject any other [`Catalog`] instead.

use crate::catalog::Catalog;
use crate::model::{ChallengeDraft, ChallengeKind, Difficulty, SourceRef};

fn article(
    text: &str,
    blank: &str,
    hint: &str,
    source: SourceRef,
    difficulty: Difficulty,
) -> ChallengeDraft {
    ChallengeDraft {
        kind: ChallengeKind::Article,
        text: text.to_string(),
        blanks: vec![blank.to_string()],
        hints: vec![hint.to_string()],
        source,
        media_path: None,
        difficulty,
    }
}

fn video(
    text: &str,
    blank: &str,
    hint: &str,
    source: SourceRef,
    media_path: &str,
    difficulty: Difficulty,
) -> ChallengeDraft {
    ChallengeDraft {
        kind: ChallengeKind::Video,
        text: text.to_string(),
        blanks: vec![blank.to_string()],
        hints: vec![hint.to_string()],
        source,
        media_path: Some(media_path.to_string()),
        difficulty,
    }
}

fn source(title: &str, author: &str, url: &str) -> SourceRef {
    SourceRef::new(title, author, Some(url.to_string()))
}

/// Build the built-in catalog.
///
/// # Panics
///
/// Panics if the built-in data fails challenge validation, which would be a
/// defect in this module rather than a runtime condition.
#[must_use]
pub fn builtin_catalog() -> Catalog {
    let drafts = vec![
        article(
            "The ancient Egyptians built massive pyramids as part of their ___.",
            "religion",
            "A system of beliefs and worship",
            source(
                "Ancient Egypt",
                "Wikipedia",
                "https://en.wikipedia.org/wiki/Culture_of_Egypt",
            ),
            Difficulty::Easy,
        ),
        video(
            "I just need to light the ___ , you have insurance right?.",
            "torch",
            "A portable light source that uses a flame.",
            source("Hydrogen", "Sick Science!", "https://www.youtube.com/@sickscience/"),
            "/videos/v1.mp4",
            Difficulty::Easy,
        ),
        article(
            "Water changes from a liquid to a gas during the process of ___.",
            "evaporation",
            "Think about what happens when water boils",
            source(
                "Evaporation and the Water Cycle",
                "U.S. Geological Survey",
                "https://www.usgs.gov/special-topics/water-science-school/science/evaporation-and-water-cycle",
            ),
            Difficulty::Easy,
        ),
        video(
            "My parents ___ into thinking computer games are no fun .",
            "brainwashed",
            "To make someone believe something untrue by using force or threats.",
            source(
                "Video games",
                "JRE podcast",
                "https://www.youtube.com/channel/UCzQUP1qoWDoEbmsQxvdjxgQ",
            ),
            "/videos/v2.mp4",
            Difficulty::Easy,
        ),
        article(
            "Setting clear goals can increase your ___ to achieve them.",
            "drive",
            "The internal motivation that pushes you to act.",
            source(
                "Motivation and Goal Setting",
                "Cuesta College",
                "https://www.cuesta.edu/student/resources/ssc/study_guides/study_skills/502_study_goals.html",
            ),
            Difficulty::Easy,
        ),
        article(
            "The teacher used a variety of strategies to ___ to different learning styles.",
            "cater",
            "To provide what is needed or required.",
            source(
                "7 types of learning styles",
                "Teach:able",
                "https://teachable.com/blog/types-of-learning-styles",
            ),
            Difficulty::Medium,
        ),
        video(
            "So it isn't blown ___.",
            "environmentally",
            "relating to the natural world and the impact of human activity on it.",
            source(
                "Electric tanks",
                "JRE podcast",
                "https://www.youtube.com/channel/UCzQUP1qoWDoEbmsQxvdjxgQ",
            ),
            "/videos/v3.mp4",
            Difficulty::Medium,
        ),
        article(
            "___ is the process by which plants convert sunlight into chemical energy.",
            "Photosynthesis",
            "The process by which green plants and some other organisms use sunlight to synthesize foods with the help of chlorophyll.",
            source(
                "Plants",
                "National Geographic Education",
                "https://education.nationalgeographic.org/resource/photosynthesis/",
            ),
            Difficulty::Medium,
        ),
        video(
            "We are launching to space by going to Earth's ___.",
            "orbit",
            "The curved path of a celestial object or spacecraft around a star, planet, or moon.",
            source("Scales", "the_science_fact", "https://www.youtube.com/@the_science_fact"),
            "/videos/v4.mp4",
            Difficulty::Medium,
        ),
        article(
            "The treaty marked the end of the war and the beginning of a new political ___.",
            "era",
            "A period characterized by particular events or developments.",
            source(
                "The Treaty of Versailles",
                "Office of the historian",
                "https://history.state.gov/milestones/1914-1920/paris-peace",
            ),
            Difficulty::Medium,
        ),
        article(
            "After watching the documentary, she felt a profound sense of ___ , realizing that every stranger has a life as vivid and complex as her own.",
            "sonder",
            "The realization that each random passerby is living a life as complex as one's own.",
            source(
                "The Dictionary of Obscure Sorrows",
                "Wikipedia",
                "https://en.wikipedia.org/wiki/The_Dictionary_of_Obscure_Sorrows",
            ),
            Difficulty::Hard,
        ),
        video(
            "Caffein is an ___ .",
            "adenosine antagonist",
            "A substance that blocks the action of adenosine, a neurotransmitter that promotes sleep and relaxation.",
            source(
                "Caffein",
                "JRE podcast",
                "https://www.youtube.com/channel/UCzQUP1qoWDoEbmsQxvdjxgQ",
            ),
            "/videos/v5.mp4",
            Difficulty::Hard,
        ),
        article(
            "The ancient manuscript was filled with ___ , making it a challenge for modern scholars to interpret.",
            "hapax legomenon",
            "A word or expression that occurs only once within a context, such as a single document or the entire corpus of a language.",
            source(
                "Hapax legomenon",
                "Wikipedia",
                "https://en.wikipedia.org/wiki/Hapax_legomenon",
            ),
            Difficulty::Hard,
        ),
        video(
            "There is an astronomer in that ___ .",
            "observatory",
            "place where astronomers observe celestial events",
            source("The Universe", "UniverseLair", "https://www.youtube.com/@UniverseLair/"),
            "/videos/v6.mp4",
            Difficulty::Medium,
        ),
        article(
            "The biologist was fascinated by the ___ , which seemed to defy conventional classification.",
            "amphisbaena",
            "A mythical serpent with a head at each end.",
            source(
                "250 Unique Words With Their Meanings",
                "Parade",
                "https://parade.com/1241196/marynliles/unique-words/",
            ),
            Difficulty::Hard,
        ),
    ];

    let challenges = drafts
        .into_iter()
        .map(|draft| draft.validate().expect("built-in challenge data is valid"))
        .collect();

    Catalog::new(challenges)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_validates() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.len(), 15);
    }

    #[test]
    fn builtin_distribution_matches_source_data() {
        let catalog = builtin_catalog();

        assert_eq!(catalog.count_by_kind(ChallengeKind::Article), 9);
        assert_eq!(catalog.count_by_kind(ChallengeKind::Video), 6);
        assert_eq!(catalog.count_by_difficulty(Difficulty::Easy), 5);
        assert_eq!(catalog.count_by_difficulty(Difficulty::Medium), 6);
        assert_eq!(catalog.count_by_difficulty(Difficulty::Hard), 4);
    }

    #[test]
    fn every_video_has_media_every_article_does_not() {
        for (_, challenge) in builtin_catalog().iter() {
            match challenge.kind() {
                ChallengeKind::Video => assert!(challenge.media_path().is_some()),
                ChallengeKind::Article => assert!(challenge.media_path().is_none()),
            }
        }
    }

    #[test]
    fn every_challenge_has_aligned_hints() {
        for (_, challenge) in builtin_catalog().iter() {
            assert_eq!(challenge.blanks().len(), challenge.hints().len());
            assert_eq!(challenge.segments().len(), challenge.blank_count() + 1);
        }
    }
}
