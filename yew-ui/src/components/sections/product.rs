// SPDX-License-Identifier: MIT OR Apache-2.0

use yew::prelude::*;

use crate::components::card::{Card, FeatureCard, SectionHeading};
use crate::components::icons::{Icon, IconKind};
use crate::components::tab_bar::TabBar;
use crate::data::nav::PRODUCT;
use crate::data::product::{
    CORE_FUNCTIONS, HARDWARE_FEATURES, HEADLINE_FIGURES, PRODUCT_IMAGES, SOFTWARE_FEATURES, SPECS,
};
use crate::model::carousel::Carousel;
use crate::model::tabs::{ProductTab, Tab};

#[function_component(Product)]
pub fn product() -> Html {
    let tab = use_state_eq(ProductTab::default);
    let carousel = use_state_eq(|| Carousel::new(PRODUCT_IMAGES.len()));

    let on_tab = {
        let tab = tab.clone();
        Callback::from(move |next: ProductTab| tab.set(next))
    };
    let prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set(carousel.prev()))
    };
    let next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set(carousel.next()))
    };

    let features = match *tab {
        ProductTab::Hardware => HARDWARE_FEATURES,
        ProductTab::Software => SOFTWARE_FEATURES,
    };
    let image = PRODUCT_IMAGES.get(carousel.index());

    html! {
        <section id={PRODUCT} class="section section-muted">
            <div class="container">
                <SectionHeading
                    badge={Some("产品详解")}
                    icon={IconKind::Cpu}
                    title="产品"
                    highlight="详细介绍"
                    subtitle={Some("Mulfin结合了先进的AI技术和精心设计的硬件，为用户提供前所未有的情感陪伴体验。")}
                />

                <div class="grid grid-2">
                    <Card class="carousel">
                        <div class="carousel-frame">
                            if let Some(image) = image {
                                <img src={image.url} alt={image.title} class="carousel-image" />
                            }
                            <button type="button" class="carousel-prev" aria-label="上一张" onclick={prev}>
                                <Icon kind={IconKind::ChevronLeft} />
                            </button>
                            <button type="button" class="carousel-next" aria-label="下一张" onclick={next}>
                                <Icon kind={IconKind::ChevronRight} />
                            </button>
                        </div>
                        if let Some(image) = image {
                            <div class="carousel-caption">
                                <h3>{ image.title }</h3>
                                <p>{ image.description }</p>
                            </div>
                        }
                        <div class="carousel-indicators">
                            { for (0..carousel.len()).map(|index| {
                                let carousel = carousel.clone();
                                let is_current = index == carousel.index();
                                html! {
                                    <button
                                        type="button"
                                        class={classes!("carousel-indicator", is_current.then_some("active"))}
                                        aria-label={format!("第{}张", index + 1)}
                                        onclick={Callback::from(move |_: MouseEvent| carousel.set(carousel.select(index)))}
                                    />
                                }
                            }) }
                        </div>
                    </Card>

                    <Card class="spec-sheet">
                        <h3>{ "技术规格" }</h3>
                        <dl class="spec-grid">
                            { for SPECS.iter().map(|(name, value)| html! {
                                <div class="spec">
                                    <dt>{ *name }</dt>
                                    <dd>{ *value }</dd>
                                </div>
                            }) }
                        </dl>
                        <h4>{ "核心功能" }</h4>
                        <div class="chip-list">
                            { for CORE_FUNCTIONS.iter().map(|function| html! {
                                <span class="chip">{ *function }</span>
                            }) }
                        </div>
                    </Card>
                </div>

                <TabBar<ProductTab> active={*tab} on_select={on_tab} />
                <div class="grid grid-4 tab-panel" data-tab={tab.key()}>
                    { for features.iter().map(|feature| html! {
                        <FeatureCard feature={*feature} />
                    }) }
                </div>

                <div class="cta-banner">
                    <h3>{ "革命性的情感陪伴体验" }</h3>
                    <p>{ "Mulfin不仅是一个产品，更是一个能够理解、学习和成长的AI伙伴。" }</p>
                    <div class="summary-figures">
                        { for HEADLINE_FIGURES.iter().map(|(value, caption)| html! {
                            <div>
                                <div class="figure-value">{ *value }</div>
                                <div class="figure-caption">{ *caption }</div>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
