use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::core::contact::{ContactPayload, Handoff};
use crate::ui::common::{Badge, Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle};
use crate::ui::icon::{Glyph, Icon};
use crate::ui::magnetic::Magnetic;
use crate::ui::site_context::use_site_context;

const INPUT_CLASS: &str = "h-9 w-full rounded-xl border border-white/10 bg-white/5 px-3 font-mono text-sm text-white placeholder:text-white/35 focus:outline-none focus:ring-2 focus:ring-cyan-300/30";

fn hand_off(handoff: Option<Handoff>) {
    let Some(handoff) = handoff else {
        leptos::logging::log!("no contact channel configured, ignoring submission");
        return;
    };
    #[cfg(not(feature = "ssr"))]
    crate::ui::dom::perform_handoff(&handoff);
    #[cfg(feature = "ssr")]
    let _ = handoff;
}

#[component]
fn CodeLine(number: u32, children: Children) -> impl IntoView {
    view! {
        <div class="flex gap-3 text-sm">
            <span class="w-5 shrink-0 select-none text-right text-white/30">{number}</span>
            <div class="min-w-0 flex-1">{children()}</div>
        </div>
    }
}

/// Project brief styled as a source file.
///
/// Submitting hands the fields to the first configured channel; the second
/// button always targets WhatsApp.
#[component]
pub fn ContactForm() -> impl IntoView {
    let site = use_site_context();
    let name = RwSignal::new(String::new());
    let contact = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let payload = move || {
        ContactPayload::new(
            name.get_untracked(),
            contact.get_untracked(),
            message.get_untracked(),
        )
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        hand_off(site.submission(&payload()));
    };

    let on_direct = Callback::new(move |_: ()| hand_off(site.direct_messaging(&payload())));

    view! {
        <Card class="bg-black/40">
            <CardHeader>
                <div class="mb-2 flex items-center justify-between gap-3">
                    <div class="flex items-center">
                        <span class="h-3 w-3 rounded-full bg-red-400/70"></span>
                        <span class="ml-2 h-3 w-3 rounded-full bg-yellow-300/70"></span>
                        <span class="ml-2 h-3 w-3 rounded-full bg-emerald-400/70"></span>
                        <span class="ml-3 text-xs text-white/60">"projeto.ts"</span>
                    </div>
                    <Badge>"Estamos de prontidão"</Badge>
                </div>
                <CardTitle>"Descreva o projeto"</CardTitle>
                <CardDescription>"Um resumo direto já é suficiente para começarmos."</CardDescription>
            </CardHeader>

            <CardContent>
                <form on:submit=on_submit class="space-y-4">
                    <div class="rounded-2xl border border-white/10 bg-black/30 p-4 font-mono">
                        <div class="space-y-3">
                            <CodeLine number=1>
                                <span class="text-white/55">"// Vamos transformar sua ideia em produto."</span>
                            </CodeLine>
                            <CodeLine number=2>
                                <span class="text-[rgba(0,229,255,0.95)]">"const"</span>
                                " "
                                <span class="text-white/90">"projeto"</span>
                                <span class="text-white/60">" = {"</span>
                            </CodeLine>
                            <CodeLine number=3>
                                <label class="flex flex-col gap-2 sm:flex-row sm:items-center">
                                    <span class="shrink-0 text-white/60">"nome:"</span>
                                    <input
                                        class=INPUT_CLASS
                                        name="nome"
                                        placeholder="Seu nome"
                                        prop:value=move || name.get()
                                        on:input=move |ev| name.set(event_target_value(&ev))
                                    />
                                </label>
                            </CodeLine>
                            <CodeLine number=4>
                                <label class="flex flex-col gap-2 sm:flex-row sm:items-center">
                                    <span class="shrink-0 text-white/60">"contato:"</span>
                                    <input
                                        class=INPUT_CLASS
                                        name="contato"
                                        placeholder="WhatsApp ou email"
                                        prop:value=move || contact.get()
                                        on:input=move |ev| contact.set(event_target_value(&ev))
                                    />
                                </label>
                            </CodeLine>
                            <CodeLine number=5>
                                <label class="block min-w-0">
                                    <span class="text-white/60">"mensagem: `"</span>
                                    <textarea
                                        class=format!("{INPUT_CLASS} mt-2 h-auto min-h-[120px] py-2")
                                        name="mensagem"
                                        placeholder="O que você quer construir?\nEx: área logada + pagamentos + painel admin..."
                                        prop:value=move || message.get()
                                        on:input=move |ev| message.set(event_target_value(&ev))
                                    ></textarea>
                                    <span class="mt-2 block text-white/60">"`"</span>
                                </label>
                            </CodeLine>
                            <CodeLine number=6>
                                <span class="text-white/60">"};"</span>
                            </CodeLine>
                            <CodeLine number=7>
                                <span class="text-white/55">
                                    "// Clique em "
                                    <span class="text-[rgba(0,255,138,0.9)]">"Enviar"</span>
                                    " para continuar."
                                </span>
                            </CodeLine>
                        </div>
                    </div>

                    <div class="flex flex-col gap-3 sm:flex-row">
                        <Magnetic class="w-full sm:flex-1">
                            <Button
                                kind="submit"
                                disabled=!site.accepts_submissions()
                                class="w-full border border-white/10 !bg-[rgba(0,255,138,0.16)] hover:!bg-[rgba(0,255,138,0.22)]"
                            >
                                <span>"Enviar"</span>
                                <Icon glyph=Glyph::ArrowRight class="h-4 w-4" />
                            </Button>
                        </Magnetic>
                        <Magnetic class="w-full sm:flex-1">
                            <Button
                                variant=ButtonVariant::Secondary
                                size=ButtonSize::Medium
                                disabled=!site.has_messaging()
                                on_click=on_direct
                                class="w-full"
                            >
                                <Icon glyph=Glyph::Phone class="h-4 w-4" />
                                <span>"Abrir no WhatsApp"</span>
                            </Button>
                        </Magnetic>
                    </div>
                </form>
            </CardContent>
        </Card>
    }
}
