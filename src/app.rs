use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::navigation::Navigation;
use crate::config;
use crate::sections::{
    competitive_advantages::CompetitiveAdvantages, faq::Faq, footer::Footer, hero::Hero,
    investment_opportunity::InvestmentOpportunity, market_opportunity::MarketOpportunity,
    problem_solution::ProblemSolution, proof_of_concept::ProofOfConcept, team_vision::TeamVision,
};

#[function_component(App)]
pub fn app() -> Html {
    use_title(config::DOCUMENT_TITLE.to_string());

    html! {
        <div class="app">
            <Navigation />
            <main>
                <Hero />
                <ProblemSolution />
                <ProofOfConcept />
                <CompetitiveAdvantages />
                <MarketOpportunity />
                <TeamVision />
                <InvestmentOpportunity />
                <Faq />
            </main>
            <Footer />
        </div>
    }
}
