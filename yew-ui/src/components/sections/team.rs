// SPDX-License-Identifier: MIT OR Apache-2.0

use yew::prelude::*;

use crate::components::card::{Card, SectionHeading, StatCard};
use crate::components::icons::{Icon, IconKind};
use crate::components::tab_bar::TabBar;
use crate::data::nav::TEAM as TEAM_SECTION;
use crate::data::team::{ceo, departments, TeamMember, TEAM};
use crate::model::selection::toggle;
use crate::model::tabs::{Tab, TeamView};

/// Skills shown on a collapsed card.
const SKILL_PREVIEW: usize = 3;
/// Characters of the CEO bio shown in the org chart.
const BIO_PREVIEW: usize = 60;

const STRENGTHS: &[(IconKind, &str, &str)] = &[
    (IconKind::Award, "行业经验", "团队成员平均拥有8年以上相关行业经验，深度理解市场需求"),
    (IconKind::Zap, "技术实力", "拥有多项AI和硬件相关专利，技术实力获得行业认可"),
    (IconKind::Users, "团队协作", "跨领域专业团队，具备完整的产品开发和市场推广能力"),
    (IconKind::Target, "执行能力", "成功完成50+项目，具备强大的项目管理和执行能力"),
];

fn avatar(member: &TeamMember, class: &'static str) -> Html {
    html! { <div class={classes!("avatar", class)} aria-hidden="true">{ member.initial() }</div> }
}

#[derive(Properties, PartialEq)]
struct MemberCardProps {
    member: &'static TeamMember,
    expanded: bool,
    on_toggle: Callback<&'static str>,
}

#[function_component(MemberCard)]
fn member_card(props: &MemberCardProps) -> Html {
    let member = props.member;
    let onclick = {
        let id = member.id;
        props.on_toggle.reform(move |_: MouseEvent| id)
    };
    let hidden_skills = member.skills.len().saturating_sub(SKILL_PREVIEW);

    html! {
        <Card class={classes!("member-card", props.expanded.then_some("expanded"))} onclick={onclick}>
            <div class="member-header">
                { avatar(member, "avatar-lg") }
                <div>
                    <h4>{ member.name }</h4>
                    <div class="member-position">{ member.position }</div>
                    <div class="member-location"><Icon kind={IconKind::MapPin} class="icon-xs" />{ "北京" }</div>
                </div>
            </div>
            <p class="member-bio">{ member.bio }</p>
            <div class="chip-list">
                { for member.skills.iter().take(SKILL_PREVIEW).map(|skill| html! { <span class="chip">{ *skill }</span> }) }
                if hidden_skills > 0 {
                    <span class="chip more">{ format!("+{hidden_skills}") }</span>
                }
            </div>
            if props.expanded {
                <div class="member-details">
                    <h5>{ "全部技能" }</h5>
                    <div class="chip-list">
                        { for member.skills.iter().map(|skill| html! { <span class="chip">{ *skill }</span> }) }
                    </div>
                </div>
            }
        </Card>
    }
}

fn org_chart() -> Html {
    let leader = ceo().map(|ceo| {
        let bio: String = ceo.bio.chars().take(BIO_PREVIEW).collect();
        html! {
            <Card class="org-ceo">
                { avatar(ceo, "avatar-lg") }
                <h4>{ ceo.name }</h4>
                <div class="member-position">{ ceo.position }</div>
                <p>{ format!("{bio}...") }</p>
            </Card>
        }
    });

    html! {
        <div class="org-chart">
            { for leader }
            <div class="grid grid-3">
                { for departments().into_iter().map(|dept| html! {
                    <Card class="org-department">
                        <h4>{ dept.name }</h4>
                        if let Some(lead) = dept.lead {
                            <div class="org-lead">
                                { avatar(lead, "avatar-md") }
                                <div>
                                    <div class="member-name">{ lead.name }</div>
                                    <div class="member-position">{ lead.position }</div>
                                </div>
                            </div>
                        }
                        <ul class="org-members">
                            { for dept.members.iter().map(|member| html! {
                                <li>
                                    { avatar(member, "avatar-sm") }
                                    <span>{ member.name }</span>
                                    <span class="member-position">{ member.position }</span>
                                </li>
                            }) }
                        </ul>
                    </Card>
                }) }
            </div>
        </div>
    }
}

#[function_component(Team)]
pub fn team() -> Html {
    let view = use_state_eq(TeamView::default);
    let expanded = use_state_eq(|| None::<&'static str>);

    let on_view = {
        let view = view.clone();
        Callback::from(move |next: TeamView| view.set(next))
    };
    let on_toggle = {
        let expanded = expanded.clone();
        Callback::from(move |id: &'static str| expanded.set(toggle(*expanded, id)))
    };

    let stats = [
        ("团队成员", TEAM.len().to_string(), "核心团队规模"),
        ("平均经验", "8+".to_string(), "年行业经验"),
        ("技术专利", "12".to_string(), "已申请专利"),
        ("项目经验", "50+".to_string(), "成功项目数"),
    ];

    html! {
        <section id={TEAM_SECTION} class="section section-muted">
            <div class="container">
                <SectionHeading
                    badge={Some("团队介绍")}
                    icon={IconKind::Users}
                    title="专业的"
                    highlight="核心团队"
                    subtitle={Some("汇聚AI、产品、运营等领域的资深专家，具备丰富的行业经验和成功项目背景。")}
                />

                <div class="grid grid-4">
                    { for stats.into_iter().map(|(title, value, subtitle)| html! {
                        <StatCard title={title} value={value} subtitle={Some(AttrValue::from(subtitle))} />
                    }) }
                </div>

                <TabBar<TeamView> active={*view} on_select={on_view} />
                <div class="tab-panel" data-tab={view.key()}>
                    { match *view {
                        TeamView::Grid => html! {
                            <div class="grid grid-4">
                                { for TEAM.iter().map(|member| html! {
                                    <MemberCard
                                        member={member}
                                        expanded={*expanded == Some(member.id)}
                                        on_toggle={on_toggle.clone()}
                                    />
                                }) }
                            </div>
                        },
                        TeamView::Org => org_chart(),
                    } }
                </div>

                <h3 class="subheading">
                    { "团队" }
                    <span class="highlight">{ "核心优势" }</span>
                </h3>
                <div class="grid grid-4">
                    { for STRENGTHS.iter().map(|(icon, title, text)| html! {
                        <div class="advantage">
                            <Icon kind={*icon} class="icon-lg" />
                            <h4>{ *title }</h4>
                            <p>{ *text }</p>
                        </div>
                    }) }
                </div>
                <p class="closing-note">{ "专业、高效、创新的团队是Mulfin成功的核心保障" }</p>
            </div>
        </section>
    }
}
