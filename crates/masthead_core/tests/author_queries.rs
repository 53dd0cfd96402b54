use masthead_core::{Author, Catalog, CatalogError, ValidationError};
use std::collections::BTreeSet;

#[test]
fn create_author_rejects_empty_name() {
    let mut catalog = Catalog::new();
    assert_eq!(
        catalog.create_author("").unwrap_err(),
        CatalogError::Validation(ValidationError::EmptyAuthorName)
    );
    assert!(catalog.authors().is_empty());
}

#[test]
fn add_article_uses_self_as_author() {
    let mut catalog = Catalog::new();
    let carry = catalog.create_author("Carry Bradshaw").unwrap();
    let vogue = catalog.create_magazine("Vogue", "Fashion").unwrap();

    let id = carry
        .add_article(&mut catalog, vogue, "How to wear a tutu with style")
        .unwrap();
    let article = catalog.article(id).unwrap();
    assert_eq!(article.author(), &carry);
    assert_eq!(article.magazine_id(), vogue);

    let err = carry.add_article(&mut catalog, vogue, "Tiny").unwrap_err();
    assert!(matches!(
        err,
        CatalogError::Validation(ValidationError::TitleLength { len: 4 })
    ));
}

#[test]
fn articles_keep_creation_order() {
    let mut catalog = Catalog::new();
    let carry = catalog.create_author("Carry Bradshaw").unwrap();
    let nathaniel = catalog.create_author("Nathaniel Hawthorne").unwrap();
    let vogue = catalog.create_magazine("Vogue", "Fashion").unwrap();
    let ad = catalog.create_magazine("AD", "Architecture").unwrap();

    carry
        .add_article(&mut catalog, vogue, "How to wear a tutu with style")
        .unwrap();
    nathaniel
        .add_article(&mut catalog, vogue, "Dating life in NYC")
        .unwrap();
    carry
        .add_article(&mut catalog, ad, "2023 Eccentric Design Trends")
        .unwrap();

    let titles: Vec<&str> = carry
        .articles(&catalog)
        .into_iter()
        .map(|article| article.title())
        .collect();
    assert_eq!(
        titles,
        vec!["How to wear a tutu with style", "2023 Eccentric Design Trends"]
    );
    assert_eq!(nathaniel.articles(&catalog).len(), 1);
}

#[test]
fn equal_author_values_share_articles() {
    let mut catalog = Catalog::new();
    let carry = catalog.create_author("Carry Bradshaw").unwrap();
    let vogue = catalog.create_magazine("Vogue", "Fashion").unwrap();
    carry
        .add_article(&mut catalog, vogue, "How to be single and happy")
        .unwrap();

    let same_name = Author::new("Carry Bradshaw").unwrap();
    assert_eq!(same_name.articles(&catalog).len(), 1);
}

#[test]
fn magazines_are_unique() {
    let mut catalog = Catalog::new();
    let carry = catalog.create_author("Carry Bradshaw").unwrap();
    let vogue = catalog.create_magazine("Vogue", "Fashion").unwrap();
    let ad = catalog.create_magazine("AD", "Architecture").unwrap();

    carry
        .add_article(&mut catalog, vogue, "How to wear a tutu with style")
        .unwrap();
    carry
        .add_article(&mut catalog, vogue, "How to be single and happy")
        .unwrap();
    carry
        .add_article(&mut catalog, ad, "2023 Eccentric Design Trends")
        .unwrap();

    let ids: Vec<_> = carry
        .magazines(&catalog)
        .into_iter()
        .map(|magazine| magazine.id())
        .collect();
    assert_eq!(ids, vec![vogue, ad]);
}

#[test]
fn topic_areas_is_none_without_articles() {
    let mut catalog = Catalog::new();
    let carry = catalog.create_author("Carry Bradshaw").unwrap();
    catalog.create_magazine("Vogue", "Fashion").unwrap();

    assert_eq!(carry.topic_areas(&catalog), None);
    assert!(carry.magazines(&catalog).is_empty());
}

#[test]
fn topic_areas_collects_unique_categories() {
    let mut catalog = Catalog::new();
    let carry = catalog.create_author("Carry Bradshaw").unwrap();
    let vogue = catalog.create_magazine("Vogue", "Fashion").unwrap();
    let wired = catalog.create_magazine("Wired", "Technology").unwrap();
    let elle = catalog.create_magazine("Elle", "Fashion").unwrap();

    carry
        .add_article(&mut catalog, wired, "The Future of AI")
        .unwrap();
    carry
        .add_article(&mut catalog, vogue, "How to wear a tutu with style")
        .unwrap();
    carry
        .add_article(&mut catalog, elle, "Dating life in NYC")
        .unwrap();

    let expected: BTreeSet<String> = ["Fashion", "Technology"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(carry.topic_areas(&catalog), Some(expected));
}

#[test]
fn topic_areas_follow_recategorized_magazine() {
    let mut catalog = Catalog::new();
    let carry = catalog.create_author("Carry Bradshaw").unwrap();
    let vogue = catalog.create_magazine("Vogue", "Fashion").unwrap();
    carry
        .add_article(&mut catalog, vogue, "How to wear a tutu with style")
        .unwrap();

    catalog.recategorize_magazine(vogue, "Life Style").unwrap();

    let topics = carry.topic_areas(&catalog).unwrap();
    assert!(topics.contains("Life Style"));
    assert!(!topics.contains("Fashion"));
}

#[test]
fn author_name_is_read_only() {
    let mut catalog = Catalog::new();
    let mut carry = catalog.create_author("Carry Bradshaw").unwrap();
    assert!(carry.set_name("Charlotte York").is_err());
    assert_eq!(carry.name(), "Carry Bradshaw");
    assert_eq!(carry.to_string(), "Carry Bradshaw");
}

#[test]
fn author_lookup_by_name() {
    let mut catalog = Catalog::new();
    let carry = catalog.create_author("Carry Bradshaw").unwrap();

    assert_eq!(catalog.author("Carry Bradshaw"), Some(&carry));
    assert!(catalog.author("Nobody").is_none());
    assert!(catalog.author("carry bradshaw").is_none());
}
