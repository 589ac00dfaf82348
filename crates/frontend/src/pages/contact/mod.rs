mod view_model;

use contracts::shared::site::CONTACT_CHANNELS;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::shared::components::Button;
use crate::shared::icons::icon;
use crate::shared::motion::stagger_style;
pub use view_model::{ContactForm, ContactViewModel, SubmitStatus};

#[component]
pub fn ContactPage() -> impl IntoView {
    let vm = ContactViewModel::new();

    view! {
        <section class="contact">
            <div class="contact__background">
                <img src="/images/dinopedia/1.png" alt="" />
                <div class="contact__shade"></div>
            </div>
            <div class="contact__content container">
                <div class="contact__info reveal">
                    <span class="eyebrow">"Get in Touch"</span>
                    <h1 class="display">
                        <span class="display__lead">"Connect With"</span>
                        <span class="display__accent">"Adventure"</span>
                    </h1>
                    <div class="contact__channels">
                        {CONTACT_CHANNELS
                            .iter()
                            .enumerate()
                            .map(|(index, channel)| {
                                let title = channel.title;
                                let value = channel.value;
                                view! {
                                    <div class="channel slide-in" style=stagger_style(400, 100, index)>
                                        <div class="channel__icon">{icon(channel.icon)}</div>
                                        <div class="channel__body">
                                            <span class="channel__title">{title}</span>
                                            <p class="channel__value">{value}</p>
                                        </div>
                                        <button
                                            class="channel__copy"
                                            aria-label=format!("Copy {}", title)
                                            on:click=move |_| vm.copy_command(title, value)
                                        >
                                            {move || {
                                                if vm.copied.get() == Some(title) {
                                                    view! { <span class="channel__copied">{icon("check")}</span> }.into_any()
                                                } else {
                                                    icon("copy")
                                                }
                                            }}
                                        </button>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <ContactFormPanel vm=vm />
            </div>
        </section>
    }
}

#[component]
fn ContactFormPanel(vm: ContactViewModel) -> impl IntoView {
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit_command();
    };

    view! {
        <div class="contact-form reveal" style="animation-delay: 200ms">
            <div class="contact-form__glow"></div>
            <form class="contact-form__body" on:submit=on_submit>
                <div class="contact-form__row">
                    <div class="field">
                        <label for="name">"Name"</label>
                        <input
                            type="text"
                            id="name"
                            required
                            placeholder="Your name"
                            prop:value=move || vm.form.with(|f| f.name.clone())
                            on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            required
                            placeholder="your@email.com"
                            prop:value=move || vm.form.with(|f| f.email.clone())
                            on:input=move |ev| vm.form.update(|f| f.email = event_target_value(&ev))
                        />
                    </div>
                </div>
                <div class="field">
                    <label for="subject">"Subject"</label>
                    <input
                        type="text"
                        id="subject"
                        required
                        placeholder="How can we help?"
                        prop:value=move || vm.form.with(|f| f.subject.clone())
                        on:input=move |ev| vm.form.update(|f| f.subject = event_target_value(&ev))
                    />
                </div>
                <div class="field">
                    <label for="message">"Message"</label>
                    <textarea
                        id="message"
                        required
                        rows="3"
                        placeholder="Your message..."
                        prop:value=move || vm.form.with(|f| f.message.clone())
                        on:input=move |ev| vm.form.update(|f| f.message = event_target_value(&ev))
                    ></textarea>
                </div>
                {move || vm.error.get().map(|msg| view! { <p class="contact-form__error">{msg}</p> })}
                <Button
                    class="button--amber button--block"
                    button_type="submit"
                    disabled=Signal::derive(move || vm.status.get() == SubmitStatus::Sending)
                >
                    {move || vm.status.get().button_label()}
                </Button>
            </form>
        </div>
    }
}
