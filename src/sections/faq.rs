use yew::prelude::*;

use crate::accordion::Accordion;
use crate::actions::{mail_callback, MailTemplate};
use crate::icons::Icon;
use crate::reveal::{reveal_classes, reveal_delay, stagger, use_reveal, Entrance};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "What is Cognivus's competitive advantage in the AI drug discovery market?",
        answer: "Cognivus is the only AI platform focused on synthesis optimization, addressing the critical \
                 bottleneck in drug development. Our 90.8% AUC model performance with 5 validated BACE1 leads \
                 demonstrates proven technology in a $8.2B market growing at 18.2% CAGR, with proprietary \
                 algorithms providing sustainable competitive advantages.",
    },
    FaqEntry {
        question: "What is the current funding status and use of capital?",
        answer: "We are raising $4.25M in seed funding to validate our AI predictions through wet lab testing \
                 and scale operations. Funds will be allocated to: 40% wet lab validation, 30% team expansion, \
                 25% platform development, and 5% legal and regulatory. This positions us for a $10.6M Series A \
                 within 12-18 months.",
    },
    FaqEntry {
        question: "What partnerships are you seeking and what value do you provide?",
        answer: "We're seeking strategic partnerships with pharmaceutical companies, biotech firms, and research \
                 institutions. Partners gain access to our validated AI platform, 500x faster compound generation, \
                 and synthesis-optimized drug candidates. We offer co-development agreements, licensing deals, and \
                 joint venture opportunities.",
    },
    FaqEntry {
        question: "What are the key milestones and timeline to market?",
        answer: "2025: Platform development completed with BACE1 validation. 2026: Wet lab testing in progress. \
                 2027: Clinical partnerships and preclinical development. 2028: FDA submissions and clinical \
                 trials. Our accelerated timeline provides first-mover advantage in rapidly expanding AI drug \
                 discovery market.",
    },
    FaqEntry {
        question: "What is the market opportunity and scalability potential?",
        answer: "The AI drug discovery market is $8.2B by 2030, growing at 18.2% CAGR. Our universal platform \
                 scales to 500+ disease targets across oncology ($185B), rare diseases ($165B), and infectious \
                 diseases ($42B). Each successful drug candidate represents $100M+ in potential licensing revenue.",
    },
    FaqEntry {
        question: "How strong is your intellectual property position?",
        answer: "We have developed proprietary technology for AI-driven synthesis optimization, a unique approach \
                 in the market. Our advanced algorithms, retrosynthetic planning methods, and compound scoring \
                 systems provide competitive differentiation. We're continuously innovating to maintain our \
                 technological leadership.",
    },
    FaqEntry {
        question: "What are the key risks and how are you mitigating them?",
        answer: "Primary risks include regulatory approval uncertainty, competition from pharma giants, and \
                 technology validation. We mitigate through: proven BACE1 results, proprietary technology, \
                 experienced team, diversified target approach, and strategic partnerships. Our synthesis focus \
                 differentiates us from binding-prediction competitors.",
    },
    FaqEntry {
        question: "What type of returns can investors expect and what are comparable exits?",
        answer: "AI drug discovery companies have achieved significant exits: Recursion ($2.5B IPO), Exscientia \
                 ($2.4B SPAC), BioNTech ($21B IPO). With our synthesis-first approach in a $8.2B growing market, \
                 we target 10-50x returns through licensing deals, partnerships, IPO, or strategic acquisition \
                 within 5-7 years.",
    },
];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    entry: FaqEntry,
    open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then_some("open"))}>
            <button class="faq-question" onclick={toggle} aria-expanded={props.open.to_string()}>
                <span class="question-text">{props.entry.question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            {
                if props.open {
                    html! {
                        <div class="faq-answer">
                            <p>{props.entry.answer}</p>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let (node, revealed) = use_reveal();
    let accordion = use_state(Accordion::default);

    html! {
        <section id="faq" class="section" ref={node}>
            <div class="container">
                <div class={classes!("section-header", reveal_classes(Entrance::Up, revealed))}>
                    <div class="faq-title">
                        <div class="tile tile-blue round">{Icon::HelpCircle.view()}</div>
                        <h2>{"Frequently Asked Questions"}</h2>
                    </div>
                    <p>{"Common questions from investors and potential partners about our investment opportunity"}</p>
                </div>

                <div class="faq-list">
                    { for FAQS.iter().enumerate().map(|(index, entry)| {
                        let on_toggle = {
                            let accordion = accordion.clone();
                            Callback::from(move |_: ()| accordion.set(accordion.toggle(index)))
                        };
                        html! {
                            <div
                                key={index}
                                class={reveal_classes(Entrance::Up, revealed)}
                                style={stagger(0.0, index)}
                            >
                                <FaqItem entry={*entry} open={accordion.is_open(index)} {on_toggle} />
                            </div>
                        }
                    }) }
                </div>

                <div class={classes!("gradient-panel", "closing-cta", "faq-cta", reveal_classes(Entrance::Up, revealed))} style={reveal_delay(0.4)}>
                    <h3>{"Still Have Questions?"}</h3>
                    <p>
                        {"Our team is ready to discuss investment opportunities, partnerships, and how Cognivus \
                          can deliver significant returns in the rapidly growing AI drug discovery market."}
                    </p>
                    <div class="cta-row">
                        <button class="btn btn-primary btn-lg" onclick={mail_callback(MailTemplate::Consultation)}>
                            {"Schedule Investor Demo"}
                        </button>
                        <button class="btn btn-secondary btn-lg" onclick={mail_callback(MailTemplate::SalesInquiry)}>
                            {"Explore Partnerships"}
                        </button>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .faq-title {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.75rem;
                    margin-bottom: 1.5rem;
                }
                .faq-title h2 {
                    margin: 0;
                }
                .tile.round {
                    border-radius: 9999px;
                }
                .faq-list {
                    max-width: 56rem;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .faq-item {
                    background: #ffffff;
                    border-radius: 1rem;
                    border: 1px solid #f3f4f6;
                    box-shadow: 0 10px 25px rgba(15, 23, 42, 0.08);
                    overflow: hidden;
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    padding: 1.5rem 2rem;
                    background: none;
                    border: none;
                    text-align: left;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }
                .faq-question:hover {
                    background: #f9fafb;
                }
                .question-text {
                    font-size: 1.125rem;
                    font-weight: 600;
                    color: #111827;
                }
                .toggle-icon {
                    flex-shrink: 0;
                    font-size: 1.25rem;
                    color: #9ca3af;
                }
                .faq-item.open .toggle-icon {
                    color: #2563eb;
                }
                .faq-answer {
                    padding: 0 2rem 1.5rem 2rem;
                    animation: faq-open 0.3s ease-out;
                }
                .faq-answer p {
                    color: #4b5563;
                    line-height: 1.7;
                    margin: 0;
                }
                .faq-cta {
                    padding: 3rem;
                    border-radius: 1.5rem;
                    border: none;
                }
                @keyframes faq-open {
                    from { opacity: 0; transform: translateY(-0.5rem); }
                    to { opacity: 1; transform: none; }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_questions() {
        assert_eq!(FAQS.len(), 8);
        assert!(FAQS.iter().all(|entry| entry.question.ends_with('?')));
    }

    #[test]
    fn answers_read_as_single_paragraphs() {
        for entry in FAQS {
            assert!(!entry.answer.contains('\n'), "{}", entry.question);
            assert!(!entry.answer.contains("  "), "{}", entry.question);
        }
    }
}
