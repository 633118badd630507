// SPDX-License-Identifier: MIT OR Apache-2.0

use yew::prelude::*;

use crate::components::config_error::ConfigError;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::sections::{
    Business, Competition, Contact, Funding, Hero, Market, Problem, Product, Roadmap, Solution,
    Team,
};
use crate::constants::app_config;
use crate::context::PageConfigCtx;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| app_config());

    match &*config {
        Ok(config) => html! {
            <ContextProvider<PageConfigCtx> context={config.clone()}>
                <div class="page">
                    <Header />
                    <main>
                        <Hero />
                        <Problem />
                        <Solution />
                        <Product />
                        <Market />
                        <Competition />
                        <Business />
                        <Team />
                        <Roadmap />
                        <Funding />
                        <Contact />
                    </main>
                    <Footer />
                </div>
            </ContextProvider<PageConfigCtx>>
        },
        Err(message) => {
            log::error!("{message}");
            html! { <ConfigError message={message.clone()} /> }
        }
    }
}
