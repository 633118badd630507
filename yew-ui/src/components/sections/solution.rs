// SPDX-License-Identifier: MIT OR Apache-2.0

use yew::prelude::*;

use crate::components::card::{FeatureCard, SectionHeading};
use crate::components::icons::{Icon, IconKind};
use crate::data::nav::{CONTACT, PRODUCT, SOLUTION};
use crate::data::solution::{ADVANTAGES, SOLUTION_FEATURES, VISION_POINTS};
use crate::hooks::use_scroll_to;

#[function_component(Solution)]
pub fn solution() -> Html {
    let scroll_to = use_scroll_to();
    let go_to = |id: &'static str| scroll_to.reform(move |_: MouseEvent| id);

    html! {
        <section id={SOLUTION} class="section">
            <div class="container">
                <SectionHeading
                    badge={Some("创新解决方案")}
                    icon={IconKind::Sparkles}
                    title="Mulfin："
                    highlight="AI情感伙伴"
                    subtitle={Some("通过先进的AI技术和可爱的硬件设计，Mulfin为现代人提供全天候的情感陪伴和心理支持，让每个人都能拥有一个贴心的AI伙伴。")}
                />

                <div class="vision-panel">
                    <div>
                        <h3>{ "重新定义情感陪伴" }</h3>
                        <p>{ "Mulfin不仅仅是一个AI助手，更是一个能够理解、关怀和陪伴的情感伙伴。我们相信技术应该让人们的生活更加温暖和有意义。" }</p>
                        <ul class="check-list">
                            { for VISION_POINTS.iter().map(|point| html! {
                                <li><Icon kind={IconKind::CheckCircle} class="icon-sm check" />{ *point }</li>
                            }) }
                        </ul>
                    </div>
                    <img src="/molfin.avif" alt="Mulfin AI伙伴" class="vision-image" />
                </div>

                <div class="grid grid-4">
                    { for SOLUTION_FEATURES.iter().map(|feature| html! {
                        <FeatureCard feature={*feature} />
                    }) }
                </div>

                <h3 class="subheading">
                    { "相比传统方案的" }
                    <span class="highlight">{ "显著优势" }</span>
                </h3>
                <div class="grid grid-4">
                    { for ADVANTAGES.iter().map(|advantage| html! {
                        <div class="advantage">
                            <div class={classes!("figure-value", advantage.tone)}>{ advantage.value }</div>
                            <h4>{ advantage.title }</h4>
                            <p>{ advantage.description }</p>
                        </div>
                    }) }
                </div>

                <div class="cta-banner">
                    <h3>{ "让AI成为每个人的情感伙伴" }</h3>
                    <p>{ "Mulfin正在重新定义人机情感交互，为孤独的现代人带来温暖的陪伴体验。" }</p>
                    <div class="cta-actions">
                        <button type="button" class="btn btn-light btn-lg" onclick={go_to(PRODUCT)}>
                            { "了解产品详情" }
                            <Icon kind={IconKind::ArrowRight} class="icon-sm" />
                        </button>
                        <button type="button" class="btn btn-outline-light btn-lg" onclick={go_to(CONTACT)}>
                            { "联系我们" }
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}
