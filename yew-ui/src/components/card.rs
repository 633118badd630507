// SPDX-License-Identifier: MIT OR Apache-2.0

use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::data::product::Feature;

#[derive(Properties, PartialEq)]
pub struct CardProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    let onclick = props.onclick.clone();
    html! {
        <div
            class={classes!("card", onclick.is_some().then_some("clickable"), props.class.clone())}
            onclick={onclick}
        >
            { for props.children.iter() }
        </div>
    }
}

/// Small coloured pill above a section title.
#[derive(Properties, Debug, PartialEq)]
pub struct SectionHeadingProps {
    #[prop_or_default]
    pub badge: Option<&'static str>,
    #[prop_or(IconKind::Sparkles)]
    pub icon: IconKind,
    pub title: &'static str,
    pub highlight: &'static str,
    #[prop_or_default]
    pub subtitle: Option<&'static str>,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <div class="section-heading">
            if let Some(badge) = props.badge {
                <div class="section-badge">
                    <Icon kind={props.icon} class="icon-sm" />
                    { badge }
                </div>
            }
            <h2>
                { props.title }
                <span class="highlight">{ props.highlight }</span>
            </h2>
            if let Some(subtitle) = props.subtitle {
                <p class="section-subtitle">{ subtitle }</p>
            }
        </div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trend {
    /// Percent change.
    pub value: f64,
    pub positive: bool,
}

impl Trend {
    pub const fn up(value: f64) -> Self {
        Self {
            value,
            positive: true,
        }
    }

    pub const fn down(value: f64) -> Self {
        Self {
            value,
            positive: false,
        }
    }
}

#[derive(Properties, Debug, PartialEq)]
pub struct StatCardProps {
    pub title: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub icon: Option<IconKind>,
    #[prop_or_default]
    pub trend: Option<Trend>,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="card stat-card">
            <div class="stat-card-header">
                <span class="stat-title">{ props.title.to_string() }</span>
                if let Some(kind) = props.icon {
                    <Icon kind={kind} class="icon-md" />
                }
            </div>
            <div class="stat-value">{ props.value.to_string() }</div>
            if let Some(subtitle) = &props.subtitle {
                <div class="stat-subtitle">{ subtitle.to_string() }</div>
            }
            if let Some(trend) = props.trend {
                <div class={classes!("stat-trend", if trend.positive { "trend-up" } else { "trend-down" })}>
                    { if trend.positive { "↑ " } else { "↓ " } }
                    { format!("{}%", trend.value) }
                </div>
            }
        </div>
    }
}

#[derive(Properties, Debug, PartialEq)]
pub struct FeatureCardProps {
    pub feature: Feature,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let feature = &props.feature;
    html! {
        <div class="card feature-card">
            <div class="feature-icon"><Icon kind={feature.icon} class="icon-lg" /></div>
            <h4>{ feature.title }</h4>
            <p>{ feature.description }</p>
            <ul class="check-list">
                { for feature.items.iter().map(|item| html! {
                    <li><Icon kind={IconKind::CheckCircle} class="icon-xs check" />{ *item }</li>
                }) }
            </ul>
        </div>
    }
}
