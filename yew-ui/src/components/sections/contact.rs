// SPDX-License-Identifier: MIT OR Apache-2.0

use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::card::{Card, SectionHeading};
use crate::components::icons::{Icon, IconKind};
use crate::context::use_page_config;
use crate::data::contact::{CONTACT_CHANNELS, CONTACT_EMAIL, HOTLINE, INVESTOR_TYPES, TEAM_CONTACTS};
use crate::data::nav::CONTACT;
use crate::model::contact_form::{ContactAction, ContactState, Field, SubmitPhase};

type ContactHandle = UseReducerHandle<ContactState>;

fn on_input(state: &ContactHandle, field: Field) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        state.dispatch(ContactAction::Edit(field, input.value()));
    })
}

#[derive(Properties, PartialEq)]
struct TextFieldProps {
    field: Field,
    label: &'static str,
    #[prop_or("text")]
    kind: &'static str,
    placeholder: &'static str,
    #[prop_or_default]
    required: bool,
    value: AttrValue,
    oninput: Callback<InputEvent>,
}

#[function_component(TextField)]
fn text_field(props: &TextFieldProps) -> Html {
    let id = format!("contact-{}", props.field.attr());
    html! {
        <div class="form-field">
            <label for={id.clone()}>{ props.label }</label>
            <input
                id={id}
                name={props.field.attr()}
                type={props.kind}
                placeholder={props.placeholder}
                required={props.required}
                value={props.value.clone()}
                oninput={props.oninput.clone()}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ContactFormProps {
    state: ContactHandle,
}

#[function_component(ContactFormView)]
fn contact_form_view(props: &ContactFormProps) -> Html {
    let state = &props.state;
    let form = &state.form;
    let submitting = state.phase == SubmitPhase::Submitting;

    let onsubmit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            state.dispatch(ContactAction::Submit);
        })
    };
    let on_investor_type = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            state.dispatch(ContactAction::Edit(Field::InvestorType, select.value()));
        })
    };
    let on_message = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            state.dispatch(ContactAction::Edit(Field::Message, area.value()));
        })
    };

    html! {
        <form class="contact-form" {onsubmit}>
            <div class="grid grid-2">
                <TextField field={Field::Name} label="姓名 *" placeholder="请输入您的姓名" required={true}
                    value={form.name.clone()} oninput={on_input(state, Field::Name)} />
                <TextField field={Field::Company} label="公司/机构" placeholder="请输入公司或机构名称"
                    value={form.company.clone()} oninput={on_input(state, Field::Company)} />
            </div>
            <div class="grid grid-2">
                <TextField field={Field::Email} label="邮箱 *" kind="email" placeholder="请输入您的邮箱" required={true}
                    value={form.email.clone()} oninput={on_input(state, Field::Email)} />
                <TextField field={Field::Phone} label="电话" kind="tel" placeholder="请输入您的电话"
                    value={form.phone.clone()} oninput={on_input(state, Field::Phone)} />
            </div>
            <div class="form-field">
                <label for="contact-investorType">{ "投资者类型" }</label>
                <select id="contact-investorType" name={Field::InvestorType.attr()} onchange={on_investor_type}>
                    <option value="" selected={form.investor_type.is_empty()}>{ "请选择投资者类型" }</option>
                    { for INVESTOR_TYPES.iter().map(|kind| html! {
                        <option value={*kind} selected={form.investor_type == *kind}>{ *kind }</option>
                    }) }
                </select>
            </div>
            <div class="form-field">
                <label for="contact-message">{ "咨询内容 *" }</label>
                <textarea
                    id="contact-message"
                    name={Field::Message.attr()}
                    rows="5"
                    required={true}
                    placeholder="请详细描述您的投资意向、关注重点或其他咨询内容..."
                    value={form.message.clone()}
                    oninput={on_message}
                />
            </div>
            <button type="submit" class="btn btn-primary btn-block" disabled={!state.can_submit()}>
                <Icon kind={IconKind::Send} class="icon-sm" />
                { if submitting { "提交中..." } else { "发送咨询" } }
            </button>
        </form>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let config = use_page_config();
    let state = use_reducer_eq(ContactState::default);

    // Each phase past editing moves on by itself after a delay. Leaving the
    // phase early or unmounting drops the pending timeout.
    {
        let state = state.clone();
        let delays = (config.contact_submit_delay_ms, config.contact_reset_delay_ms);
        use_effect_with((state.phase, delays), move |(phase, (submit_ms, reset_ms))| {
            let timeout = match phase {
                SubmitPhase::Editing => None,
                SubmitPhase::Submitting => Some(Timeout::new(*submit_ms, move || {
                    state.dispatch(ContactAction::Delivered)
                })),
                SubmitPhase::Submitted => Some(Timeout::new(*reset_ms, move || {
                    state.dispatch(ContactAction::Reset)
                })),
            };
            move || drop(timeout)
        });
    }

    html! {
        <section id={CONTACT} class="section">
            <div class="container">
                <SectionHeading
                    badge={Some("联系我们")}
                    icon={IconKind::MessageSquare}
                    title="开启"
                    highlight="合作之旅"
                    subtitle={Some("我们期待与优秀的投资伙伴和合作伙伴携手，共同打造AI情感陪伴的美好未来。")}
                />

                <div class="grid grid-2">
                    <Card class="contact-card">
                        <h3>{ "投资咨询表单" }</h3>
                        if state.phase == SubmitPhase::Submitted {
                            <div class="contact-success" role="status">
                                <Icon kind={IconKind::CheckCircle} class="icon-lg" />
                                <h4>{ "提交成功！" }</h4>
                                <p>{ "我们已收到您的咨询，将在24小时内回复您。" }</p>
                            </div>
                        } else {
                            <ContactFormView state={state.clone()} />
                        }
                    </Card>

                    <div class="contact-info">
                        <Card>
                            <h4>{ "联系方式" }</h4>
                            { for CONTACT_CHANNELS.iter().map(|channel| html! {
                                <div class="contact-channel">
                                    <Icon kind={channel.icon} class="icon-md" />
                                    <div>
                                        <div class="channel-title">{ channel.title }</div>
                                        <div class="channel-content">{ channel.content }</div>
                                        <div class="channel-description">{ channel.description }</div>
                                    </div>
                                </div>
                            }) }
                        </Card>

                        <Card>
                            <h4>{ "核心团队" }</h4>
                            { for TEAM_CONTACTS.iter().map(|person| html! {
                                <div class="team-contact">
                                    <div>
                                        <div class="member-name">{ person.name }</div>
                                        <div class="member-position">{ person.role }</div>
                                        <div class="member-expertise">{ person.expertise }</div>
                                    </div>
                                    <div class="team-contact-links">
                                        <a href={person.mailto()} aria-label={format!("发送邮件给{}", person.name)}>
                                            <Icon kind={IconKind::Mail} class="icon-sm" />
                                        </a>
                                        <a href={person.tel()} aria-label={format!("致电{}", person.name)}>
                                            <Icon kind={IconKind::Phone} class="icon-sm" />
                                        </a>
                                    </div>
                                </div>
                            }) }
                        </Card>

                        <Card class="quick-contact">
                            <h4>{ "快速联系" }</h4>
                            <p>{ "如需紧急联系或预约面谈，请直接致电我们的投资者热线。" }</p>
                            <div class="quick-actions">
                                <a class="btn btn-outline" href={format!("mailto:{CONTACT_EMAIL}")}>
                                    <Icon kind={IconKind::Mail} class="icon-sm" />{ "发送邮件" }
                                </a>
                                <a class="btn btn-primary" href={format!("tel:{HOTLINE}")}>
                                    <Icon kind={IconKind::Phone} class="icon-sm" />{ "立即致电" }
                                </a>
                            </div>
                        </Card>
                    </div>
                </div>

                <p class="closing-note">
                    { "我们承诺在收到您的咨询后24小时内回复，并为每位投资者提供专业的服务支持。所有商业信息将严格保密，符合相关法律法规要求。" }
                </p>
            </div>
        </section>
    }
}
