// SPDX-License-Identifier: MIT OR Apache-2.0

use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::data::nav::{FUNDING, HERO, PROBLEM, PRODUCT};
use crate::hooks::use_scroll_to;

const FIGURES: &[(&str, &str)] = &[("1000亿+", "市场规模"), ("85%", "用户满意度"), ("24/7", "情感陪伴")];

#[function_component(Hero)]
pub fn hero() -> Html {
    let scroll_to = use_scroll_to();
    let go_to = |id: &'static str| scroll_to.reform(move |_: MouseEvent| id);

    html! {
        <section id={HERO} class="hero">
            <div class="hero-backdrop" aria-hidden="true">
                <Icon kind={IconKind::Heart} class="hero-decor heart" />
                <Icon kind={IconKind::Sparkles} class="hero-decor sparkle" />
            </div>

            <div class="container hero-grid">
                <div class="hero-copy">
                    <div class="hero-tag">
                        <Icon kind={IconKind::Sparkles} class="icon-sm" />
                        { "AI情感伙伴的未来" }
                    </div>
                    <h1>
                        <span class="block">{ "Mulfin" }</span>
                        <span class="block gradient-text">{ "可拥抱的AI伙伴" }</span>
                    </h1>
                    <p class="hero-lead">
                        { "结合先进AI技术与温暖触感体验，为现代人提供情感陪伴与心理支持，" }
                        <span class="accent">{ "重新定义人机情感交互" }</span>
                    </p>
                    <div class="hero-figures">
                        { for FIGURES.iter().map(|(value, caption)| html! {
                            <div class="hero-figure">
                                <div class="figure-value">{ *value }</div>
                                <div class="figure-caption">{ *caption }</div>
                            </div>
                        }) }
                    </div>
                    <div class="hero-actions">
                        <button type="button" class="btn btn-primary btn-lg" onclick={go_to(PRODUCT)}>
                            { "了解产品" }
                            <Icon kind={IconKind::ArrowRight} class="icon-sm" />
                        </button>
                        <button type="button" class="btn btn-outline-light btn-lg" onclick={go_to(FUNDING)}>
                            <Icon kind={IconKind::Play} class="icon-sm" />
                            { "投资机会" }
                        </button>
                    </div>
                </div>

                <div class="hero-visual">
                    <div class="hero-image">
                        <img src="/molfin.avif" alt="Mulfin AI情感伙伴" />
                    </div>
                    <div class="hero-badge top">
                        <div class="badge-title">{ "AI智能对话" }</div>
                        <div class="badge-caption">{ "24/7情感支持" }</div>
                    </div>
                    <div class="hero-badge bottom">
                        <div class="badge-title">{ "温暖触感" }</div>
                        <div class="badge-caption">{ "可拥抱设计" }</div>
                    </div>
                </div>
            </div>

            <button type="button" class="scroll-hint" onclick={go_to(PROBLEM)}>
                <span>{ "了解更多" }</span>
                <Icon kind={IconKind::ChevronDown} class="icon-sm" />
            </button>
        </section>
    }
}
