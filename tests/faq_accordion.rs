use cognivus_site::accordion::Accordion;
use cognivus_site::sections::faq::FAQS;
use quickcheck_macros::quickcheck;

#[test]
fn first_question_starts_open() {
    let accordion = Accordion::default();
    assert!(accordion.is_open(0));
    assert_eq!((0..FAQS.len()).filter(|&i| accordion.is_open(i)).count(), 1);
}

#[test]
fn walking_through_every_question() {
    let mut accordion = Accordion::default();
    for index in 1..FAQS.len() {
        accordion = accordion.toggle(index);
        assert_eq!(accordion.open_index(), Some(index));
    }
    accordion = accordion.toggle(FAQS.len() - 1);
    assert_eq!(accordion.open_index(), None);
}

#[quickcheck]
fn never_more_than_one_open(clicks: Vec<u8>) -> bool {
    let accordion = clicks
        .iter()
        .fold(Accordion::default(), |acc, &click| acc.toggle(click as usize % FAQS.len()));
    (0..FAQS.len()).filter(|&i| accordion.is_open(i)).count() <= 1
}
