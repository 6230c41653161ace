use super::common::*;
use crate::catalog::domain::{ArticleId, Audience};
use crate::recommendations::{EngineConfig, RecommendationEngine, SeededJitter};

#[test]
fn role_article_outranks_wildcard_foundations() {
    let articles = vec![
        article("w1", Audience::All, &["Basics"]),
        article("s1", Audience::Student, &["Passwords", "Basics"]),
    ];

    let response = recommend(&visitor(Audience::Student), &articles);

    assert_eq!(ids(&response), vec!["s1", "w1"]);
    assert_eq!(response.recommendations[0].score, 65.0);
    assert_eq!(response.recommendations[0].reason, "Perfect for students");
    assert_eq!(response.recommendations[0].next_step, "Learn about Passwords");
    assert_eq!(response.recommendations[1].score, 25.0);
    assert_eq!(
        response.recommendations[1].reason,
        "General foundational knowledge"
    );
}

#[test]
fn saved_topic_adds_points_but_audience_reason_stays_primary() {
    let articles = vec![article("b1", Audience::Business, &["Ransomware", "Strategy"])];
    let profile = visitor(Audience::Business).with_saved_topic("Ransomware");

    let response = recommend(&profile, &articles);

    let top = &response.recommendations[0];
    assert_eq!(top.score, 80.0);
    assert_eq!(top.reason, "Perfect for businesss");
    assert_eq!(top.next_step, "Learn about Ransomware");
}

#[test]
fn rules_are_logged_in_firing_order() {
    let articles = vec![article("w1", Audience::All, &["MFA", "Basics"])];
    let profile = visitor(Audience::Educator).with_saved_topic("MFA");

    let response = recommend(&profile, &articles);

    let rule_lines: Vec<&str> = response
        .trace
        .applied_rules
        .iter()
        .map(String::as_str)
        .filter(|line| line.starts_with("w1:"))
        .collect();
    assert_eq!(
        rule_lines,
        vec![
            "w1: wildcard audience (+10)",
            "w1: saved topic match (+30)",
            "w1: foundational boost (+15)",
        ]
    );
    assert_eq!(response.recommendations[0].score, 55.0);
    assert_eq!(
        response.recommendations[0].reason,
        "General foundational knowledge"
    );
}

#[test]
fn untagged_article_gets_guarded_next_step() {
    let articles = vec![article("u1", Audience::All, &[])];

    let response = recommend(&visitor(Audience::Student), &articles);

    assert_eq!(response.recommendations[0].next_step, "Explore more topics");
    assert_eq!(response.recommendations[0].score, 10.0);
}

#[test]
fn jitter_stays_below_configured_bound() {
    let articles = vec![
        article("s1", Audience::Student, &["Passwords"]),
        article("s2", Audience::Student, &["Phishing"]),
        article("s3", Audience::Student, &["MFA"]),
    ];

    let response = engine().recommend_with(
        &visitor(Audience::Student),
        &articles,
        &mut SeededJitter::new(11),
    );

    for recommendation in &response.recommendations {
        assert!(recommendation.score >= 50.0);
        assert!(recommendation.score < 55.0);
    }
}

#[test]
fn custom_weights_and_foundational_topic_apply() {
    let config = EngineConfig {
        audience_match_points: 5.0,
        foundational_points: 100.0,
        foundational_topic: "Checklist".to_string(),
        ..EngineConfig::default()
    };
    let articles = vec![
        article("b1", Audience::Business, &["Ransomware"]),
        article("b2", Audience::Business, &["Checklist"]),
    ];

    let response = RecommendationEngine::new(config).recommend_with(
        &visitor(Audience::Business),
        &articles,
        &mut crate::recommendations::NoJitter,
    );

    assert_eq!(ids(&response), vec!["b2", "b1"]);
    assert_eq!(response.trace.score_of(&ArticleId::from("b2")), Some(105.0));
}
