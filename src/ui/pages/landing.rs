//! Landing page component
//!
//! The whole agency site lives on one page:
//! - hero with the pointer-following glow and quick contact buttons
//! - trust strip, services (tilt cards) and deliverables
//! - process steps and FAQ
//! - direct channels and the project form
//! - closing call-to-action and footer
//!
//! Every section enters through [`Reveal`].

use chrono::Datelike;
use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::seo;
use crate::core::site::SITE_NAME;
use crate::ui::common::{
    AnchorTarget, Badge, ButtonSize, ButtonVariant, Card, CardContent, CardDescription,
    CardHeader, CardTitle, LinkButton, SectionHeader,
};
use crate::ui::contact_form::ContactForm;
use crate::ui::hero_glow::HeroGlow;
use crate::ui::icon::{Glyph, Icon};
use crate::ui::magnetic::Magnetic;
use crate::ui::reveal::Reveal;
use crate::ui::site_context::use_site_context;
use crate::ui::tilt_card::TiltCard;

const NAV_LINKS: &[(&str, &str)] = &[
    ("#servicos", "Serviços"),
    ("#processo", "Processo"),
    ("#faq", "FAQ"),
    ("#contato", "Contato"),
];

const HERO_BADGES: &[&str] = &["Sob medida", "Escalável", "Rápido", "Seguro", "UI/UX forte"];

struct Stat {
    label: &'static str,
    value: &'static str,
    note: &'static str,
    phase: &'static str,
}

const HERO_STATS: &[Stat] = &[
    Stat { label: "Construção", value: "Do zero", note: "Seu fluxo define", phase: "Descoberta" },
    Stat { label: "Customização", value: "Alta", note: "Sem limitações", phase: "Design" },
    Stat { label: "Entrega", value: "Por etapas", note: "Você acompanha", phase: "Build" },
    Stat { label: "Qualidade", value: "Sólida", note: "Base pra escalar", phase: "Evolução" },
];

/// Phase labels fade slightly from first to last
fn phase_opacity(index: usize) -> f64 {
    0.85 - index as f64 * 0.08
}

struct Highlight {
    glyph: Glyph,
    class: &'static str,
    title: &'static str,
    text: &'static str,
}

const TRUST_ITEMS: &[Highlight] = &[
    Highlight {
        glyph: Glyph::ShieldCheck,
        class: "h-5 w-5 text-[rgba(0,255,138,0.9)]",
        title: "Base segura e organizada",
        text: "Código limpo, pronto para evoluir.",
    },
    Highlight {
        glyph: Glyph::Gauge,
        class: "h-5 w-5 text-[rgba(0,229,255,0.95)]",
        title: "Rápido e agradável de usar",
        text: "Performance e UX como prioridade.",
    },
    Highlight {
        glyph: Glyph::Rocket,
        class: "h-5 w-5 text-white/90",
        title: "Entrega por etapas",
        text: "Você valida e ajusta no caminho.",
    },
];

const DELIVERABLES: &[Highlight] = &[
    Highlight {
        glyph: Glyph::ClipboardCheck,
        class: "h-5 w-5 text-[rgba(0,229,255,0.95)]",
        title: "Entregáveis claros",
        text: "Escopo, telas e entregas por etapa.",
    },
    Highlight {
        glyph: Glyph::Settings,
        class: "h-5 w-5 text-[rgba(0,255,138,0.9)]",
        title: "Integrações e automações",
        text: "Pagamentos, CRM, WhatsApp, e mais.",
    },
    Highlight {
        glyph: Glyph::Handshake,
        class: "h-5 w-5 text-white/90",
        title: "Parceria no longo prazo",
        text: "Manutenção e evolução quando fizer sentido.",
    },
];

const PROCESS_STEPS: &[(&str, &str, &str)] = &[
    ("01", "Descoberta", "Objetivo, público e requisitos essenciais."),
    ("02", "Design", "Fluxo, telas e validação rápida."),
    ("03", "Build", "Desenvolvimento por etapas e entregas."),
    ("04", "Lançar + Evoluir", "Publicação, ajustes e melhorias contínuas."),
];

const TECHNOLOGIES: &[&str] = &["Next.js", "React", "Node", "Postgres", "APIs", "Vercel"];

const FAQ: &[(&str, &str)] = &[
    (
        "Vocês usam software pronto e só adaptam?",
        "Não. O produto é construído do zero para o seu fluxo. Podemos reutilizar apenas infra (ex: autenticação) quando faz sentido.",
    ),
    (
        "Dá para começar pequeno e evoluir depois?",
        "Sim. Planejamos um MVP enxuto e evoluímos por etapas, sem precisar refazer tudo.",
    ),
    (
        "Como eu acompanho o andamento?",
        "Com checkpoints e entregas claras. Você valida telas e fluxos enquanto o produto avança.",
    ),
    (
        "E depois do lançamento?",
        "Seguimos com manutenção e melhorias conforme necessidade do negócio.",
    ),
];

const RECEIVES: &[&str] = &[
    "Planejamento claro",
    "Design e desenvolvimento por etapas",
    "Deploy pronto (Vercel)",
];

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta />
        <LandingStyles />

        <main class="min-h-screen overflow-x-hidden text-white">
            <Backdrop />
            <Header />
            <Hero />
            <TrustStrip />
            <Separator />
            <Services />
            <Deliverables />
            <Separator />
            <Process />
            <FaqSection />
            <ContactSection />
            <FinalCta />
            <Footer />
        </main>
    }
}

/// Static head tags; canonical URL and structured data are added by the shell
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text=seo::PAGE_TITLE />
        <Meta name="description" content=seo::PAGE_DESCRIPTION />
        <Meta name="keywords" content=seo::keywords() />
        <Meta name="robots" content=seo::ROBOTS />
        <Meta name="theme-color" content=seo::THEME_COLOR />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:site_name" content=SITE_NAME />
        <Meta property="og:locale" content=seo::LOCALE />
        <Meta property="og:title" content=seo::PAGE_TITLE />
        <Meta property="og:description" content=seo::PAGE_DESCRIPTION />

        // Twitter
        <Meta name="twitter:card" content="summary_large_image" />
        <Meta name="twitter:title" content=seo::PAGE_TITLE />
        <Meta name="twitter:description" content=seo::PAGE_DESCRIPTION />
    }
}

#[component]
fn Backdrop() -> impl IntoView {
    view! {
        <div class="pointer-events-none fixed inset-0 -z-10" aria-hidden="true">
            <div class="absolute inset-0 bg-[radial-gradient(1200px_circle_at_20%_10%,rgba(0,229,255,0.12),transparent_55%)]"></div>
            <div class="absolute inset-0 bg-[radial-gradient(900px_circle_at_80%_70%,rgba(0,255,138,0.08),transparent_55%)]"></div>
            <div class="absolute inset-0 bg-[linear-gradient(to_bottom,rgba(255,255,255,0.04),transparent_35%,rgba(0,0,0,0.35))]"></div>
            <div class="absolute inset-0 opacity-[0.08] [background-image:radial-gradient(rgba(255,255,255,0.4)_1px,transparent_1px)] [background-size:22px_22px]"></div>
        </div>
    }
}

#[component]
fn Separator() -> impl IntoView {
    view! { <div class="mx-auto my-6 h-px w-full max-w-6xl bg-white/10" role="separator"></div> }
}

#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="mx-auto flex w-full max-w-6xl items-center justify-between px-4 py-5 md:px-6">
            <a href="#top" class="flex items-center gap-3">
                <div class="leading-tight">
                    <div class="text-sm font-semibold tracking-wide">{SITE_NAME}</div>
                    <div class="text-xs text-white/60">"Realidade Visualizada"</div>
                </div>
            </a>

            <nav class="hidden items-center gap-6 text-sm text-white/70 md:flex">
                {NAV_LINKS
                    .iter()
                    .map(|(href, label)| view! { <a class="hover:text-white" href=*href>{*label}</a> })
                    .collect_view()}
            </nav>

            <LinkButton
                target=AnchorTarget::resolve("#contato".to_string(), "#contato")
                variant=ButtonVariant::Ghost
            >
                "Solicitar proposta"
            </LinkButton>
        </header>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let site = use_site_context();

    view! {
        <section id="top" class="mx-auto w-full max-w-6xl px-4 pb-10 pt-2 md:px-6 md:pb-16">
            <Reveal>
                <div class="relative overflow-hidden rounded-3xl bg-[linear-gradient(135deg,rgba(0,229,255,0.22),rgba(255,255,255,0.06),rgba(0,255,138,0.16))] p-[1px]">
                    <div class="relative overflow-hidden rounded-3xl border border-white/10 bg-[rgba(8,10,14,0.55)] p-6 backdrop-blur-md md:p-10">
                        <HeroGlow />

                        <div class="relative flex flex-col gap-10 md:flex-row md:items-center md:justify-between">
                            <div class="max-w-2xl">
                                <div class="mb-4 inline-flex items-center gap-2 rounded-full border border-white/10 bg-white/5 px-3 py-1 text-xs text-white/70">
                                    <Icon glyph=Glyph::Sparkles class="h-4 w-4" />
                                    "Software sob medida, do início ao fim."
                                </div>

                                <h1 class="text-balance text-3xl font-semibold leading-tight md:text-5xl">
                                    <span class="text-white">"RVLand"</span>
                                    " "
                                    <span class="text-white/80">"— sua ilha de realidades."</span>
                                    <span class="block bg-gradient-to-r from-[rgba(0,229,255,0.95)] via-white to-[rgba(0,255,138,0.95)] bg-clip-text text-transparent">
                                        "Nós codificamos o resto."
                                    </span>
                                </h1>

                                <p class="mt-4 text-pretty text-base text-white/70 md:text-lg">
                                    "Construímos "
                                    <strong class="text-white/90">"apps, sites, plataformas e sistemas"</strong>
                                    " personalizados. Você traz a visão — nós entregamos o produto pronto para uso."
                                </p>

                                <div class="mt-6 flex flex-col gap-3 sm:flex-row">
                                    <Magnetic class="w-full sm:w-auto">
                                        <LinkButton
                                            target=AnchorTarget::resolve(site.cta_messaging_link(), "#contato")
                                            external=true
                                            class="w-full"
                                        >
                                            "Falar no WhatsApp"
                                            <Icon glyph=Glyph::ArrowRight class="h-4 w-4" />
                                        </LinkButton>
                                    </Magnetic>
                                    <LinkButton
                                        target=AnchorTarget::resolve("#processo".to_string(), "#processo")
                                        variant=ButtonVariant::Secondary
                                    >
                                        "Ver o processo"
                                    </LinkButton>
                                </div>

                                <div class="mt-7 flex flex-wrap gap-2">
                                    {HERO_BADGES.iter().map(|label| view! { <Badge>{*label}</Badge> }).collect_view()}
                                </div>
                            </div>

                            <div class="grid w-full max-w-md grid-cols-2 gap-3">
                                {HERO_STATS
                                    .iter()
                                    .enumerate()
                                    .map(|(index, stat)| {
                                        view! {
                                            <Card class="min-h-[118px] bg-white/5 transition-colors hover:bg-white/[0.07]">
                                                <CardContent class="p-4">
                                                    <div class="text-xs text-white/60">{stat.label}</div>
                                                    <div class="mt-1 text-xl font-semibold text-white">{stat.value}</div>
                                                    <div class="mt-1 text-xs text-white/60">{stat.note}</div>
                                                    <div class="mt-3 h-px w-full bg-white/10"></div>
                                                    <div
                                                        class="mt-3 text-xs text-white/55"
                                                        style=format!("opacity: {:.2};", phase_opacity(index))
                                                    >
                                                        {stat.phase}
                                                    </div>
                                                </CardContent>
                                            </Card>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </Reveal>
        </section>
    }
}

#[component]
fn HighlightCard(item: &'static Highlight) -> impl IntoView {
    view! {
        <Card class="h-full min-h-[120px] bg-white/5">
            <CardContent class="flex items-start gap-3 p-5">
                <div class="mt-0.5 grid h-10 w-10 shrink-0 place-items-center rounded-xl border border-white/10 bg-white/5">
                    <Icon glyph=item.glyph class=item.class />
                </div>
                <div class="min-w-0">
                    <div class="text-sm font-semibold text-white">{item.title}</div>
                    <div class="mt-1 text-sm text-white/70">{item.text}</div>
                </div>
            </CardContent>
        </Card>
    }
}

#[component]
fn TrustStrip() -> impl IntoView {
    view! {
        <section class="mx-auto w-full max-w-6xl px-4 pb-4 md:px-6">
            <Reveal delay=80>
                <div class="grid gap-3 md:grid-cols-3">
                    {TRUST_ITEMS.iter().map(|item| view! { <HighlightCard item=item /> }).collect_view()}
                </div>
            </Reveal>
        </section>
    }
}

#[component]
fn Services() -> impl IntoView {
    view! {
        <section id="servicos" class="mx-auto w-full max-w-6xl px-4 py-10 md:px-6 md:py-14">
            <Reveal>
                <SectionHeader
                    title="O que entregamos"
                    subtitle="Soluções sob medida. O produto se adapta ao seu negócio — não o contrário."
                    right=|| view! { <Badge>"Next.js • React • APIs • Vercel"</Badge> }
                />

                <div class="relative z-10 grid gap-5 md:grid-cols-2 lg:grid-cols-4">
                    <TiltCard
                        title="Apps"
                        description="Aplicativos com fluxo e identidade próprios."
                        glyph=Glyph::Cpu
                        tag="iOS & Android"
                        bullets=&["Experiência limpa", "Integrações (pagamento, mapas)", "Evolução contínua"]
                    />
                    <TiltCard
                        title="Sites"
                        description="Institucionais e landing pages com SEO."
                        glyph=Glyph::Wand
                        tag="SEO & Performance"
                        bullets=&["Rápido", "Copy objetivo", "Pronto para anúncio/pixel"]
                    />
                    <TiltCard
                        title="Plataformas"
                        description="Web apps com áreas logadas e painéis."
                        glyph=Glyph::Layers
                        tag="Web App"
                        bullets=&["Permissões e usuários", "Dashboards e relatórios", "Escalável"]
                    />
                    <TiltCard
                        title="Sistemas"
                        description="Ferramentas internas e automações."
                        glyph=Glyph::Code
                        tag="B2B / Interno"
                        bullets=&["Integra com seu stack", "Reduz trabalho manual", "Processo mais rápido"]
                    />
                </div>
            </Reveal>
        </section>
    }
}

#[component]
fn Deliverables() -> impl IntoView {
    view! {
        <section class="mx-auto w-full max-w-6xl px-4 pb-2 md:px-6">
            <Reveal delay=60>
                <div class="grid gap-4 md:grid-cols-3">
                    {DELIVERABLES.iter().map(|item| view! { <HighlightCard item=item /> }).collect_view()}
                </div>
            </Reveal>
        </section>
    }
}

#[component]
fn Process() -> impl IntoView {
    view! {
        <section id="processo" class="mx-auto w-full max-w-6xl px-4 py-10 md:px-6 md:py-14">
            <Reveal>
                <SectionHeader
                    title="Processo"
                    subtitle="Você entende o que está sendo feito e por quê. Sem complicação."
                />

                <div class="grid gap-4 md:grid-cols-4">
                    {PROCESS_STEPS
                        .iter()
                        .enumerate()
                        .map(|(index, (number, title, text))| {
                            // Alternate cyan and green check marks
                            let check = if index % 2 == 0 {
                                "color: rgba(0,229,255,0.95); opacity: 0.9;"
                            } else {
                                "color: rgba(0,255,138,0.9); opacity: 0.9;"
                            };
                            view! {
                                <Card class="min-h-[160px] bg-white/5 transition-colors hover:bg-white/[0.07]">
                                    <CardContent class="p-5">
                                        <div class="flex items-center justify-between">
                                            <div class="text-xs text-white/60">{*number}</div>
                                            <Icon glyph=Glyph::CheckCircle class="h-4 w-4" style=check />
                                        </div>
                                        <div class="mt-2 text-lg font-semibold text-white">{*title}</div>
                                        <p class="mt-2 text-sm text-white/70">{*text}</p>
                                    </CardContent>
                                </Card>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="mt-8 flex flex-wrap items-center gap-2 text-sm text-white/70">
                    <span class="text-white/90">"Tecnologias comuns:"</span>
                    {TECHNOLOGIES.iter().map(|tech| view! { <Badge>{*tech}</Badge> }).collect_view()}
                </div>
            </Reveal>
        </section>
    }
}

#[component]
fn FaqItem(question: &'static str, answer: &'static str) -> impl IntoView {
    view! {
        <Card class="bg-white/5">
            <CardContent class="p-5">
                <details class="group">
                    <summary class="cursor-pointer list-none text-sm font-semibold text-white">
                        <span class="inline-flex items-center gap-2">
                            <span class="h-2 w-2 rounded-full bg-[rgba(0,229,255,0.85)] group-open:bg-[rgba(0,255,138,0.85)]"></span>
                            {question}
                        </span>
                    </summary>
                    <p class="mt-3 text-sm text-white/70">{answer}</p>
                </details>
            </CardContent>
        </Card>
    }
}

#[component]
fn FaqSection() -> impl IntoView {
    view! {
        <section id="faq" class="mx-auto w-full max-w-6xl px-4 py-10 md:px-6 md:py-14">
            <Reveal>
                <SectionHeader title="FAQ" subtitle="Respostas objetivas para dúvidas comuns." />
                <div class="grid gap-4 md:grid-cols-2">
                    {FAQ
                        .iter()
                        .map(|(question, answer)| view! { <FaqItem question=*question answer=*answer /> })
                        .collect_view()}
                </div>
            </Reveal>
        </section>
    }
}

#[component]
fn ContactSection() -> impl IntoView {
    let site = use_site_context();

    view! {
        <section id="contato" class="mx-auto w-full max-w-6xl px-4 py-10 md:px-6 md:py-14">
            <Reveal>
                <SectionHeader
                    title="Contato"
                    subtitle="Envie um resumo do que você precisa. Nós respondemos com o próximo passo."
                />

                <div class="grid gap-4 lg:grid-cols-2">
                    <Card class="bg-white/5">
                        <CardHeader>
                            <CardTitle>"Canais diretos"</CardTitle>
                            <CardDescription>"WhatsApp para agilidade, email para detalhar."</CardDescription>
                        </CardHeader>
                        <CardContent class="space-y-3 p-6 pt-0">
                            <Magnetic class="w-full">
                                <LinkButton
                                    target=AnchorTarget::resolve(site.cta_messaging_link(), "#")
                                    external=true
                                    class="w-full justify-between"
                                >
                                    <span class="flex items-center gap-2">
                                        <Icon glyph=Glyph::Phone class="h-4 w-4" />
                                        "WhatsApp"
                                    </span>
                                    <Icon glyph=Glyph::ArrowRight class="h-4 w-4" />
                                </LinkButton>
                            </Magnetic>

                            <LinkButton
                                target=AnchorTarget::resolve(site.cta_mail_link(), "#")
                                variant=ButtonVariant::Secondary
                                class="w-full justify-between"
                            >
                                <span class="flex items-center gap-2">
                                    <Icon glyph=Glyph::Mail class="h-4 w-4" />
                                    "Email"
                                </span>
                                <Icon glyph=Glyph::ArrowRight class="h-4 w-4" />
                            </LinkButton>

                            <div class="rounded-xl border border-white/10 bg-black/20 p-4 text-sm text-white/70">
                                <div class="font-medium text-white/90">"Para acelerar"</div>
                                <div class="mt-1">"Se tiver referência, print ou lista de funções, envie junto."</div>
                            </div>

                            <div class="rounded-xl border border-white/10 bg-black/20 p-4 text-sm text-white/70">
                                <div class="font-medium text-white/90">"O que você recebe"</div>
                                <ul class="mt-2 space-y-2">
                                    {RECEIVES
                                        .iter()
                                        .map(|item| {
                                            view! {
                                                <li class="flex items-start gap-2">
                                                    <span class="mt-[6px] inline-block h-1.5 w-1.5 rounded-full bg-[rgba(0,255,138,0.85)]"></span>
                                                    <span>{*item}</span>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        </CardContent>
                    </Card>

                    <ContactForm />
                </div>
            </Reveal>
        </section>
    }
}

#[component]
fn FinalCta() -> impl IntoView {
    view! {
        <section class="mx-auto w-full max-w-6xl px-4 pb-14 md:px-6">
            <Reveal>
                <div class="relative overflow-hidden rounded-3xl border border-white/10 bg-white/5 p-6 backdrop-blur-md md:p-10">
                    <div class="pointer-events-none absolute inset-0 bg-[radial-gradient(650px_circle_at_30%_30%,rgba(0,229,255,0.16),transparent_60%)]"></div>
                    <div class="pointer-events-none absolute inset-0 bg-[radial-gradient(650px_circle_at_70%_70%,rgba(0,255,138,0.12),transparent_60%)]"></div>

                    <div class="relative flex flex-col gap-6 md:flex-row md:items-center md:justify-between">
                        <div class="max-w-2xl">
                            <div class="text-sm text-white/70">"Pronto para começar?"</div>
                            <div class="mt-2 text-2xl font-semibold md:text-3xl">"Vamos transformar sua ideia em produto."</div>
                            <div class="mt-2 text-sm text-white/70">
                                "Um primeiro contato já define o melhor caminho: MVP, plataforma ou app."
                            </div>
                        </div>

                        <Magnetic class="w-full md:w-auto">
                            <LinkButton
                                target=AnchorTarget::resolve("#contato".to_string(), "#contato")
                                size=ButtonSize::Large
                                class="w-full md:w-auto"
                            >
                                "Iniciar conversa"
                                <Icon glyph=Glyph::ArrowRight class="h-4 w-4" />
                            </LinkButton>
                        </Magnetic>
                    </div>
                </div>
            </Reveal>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="mx-auto w-full max-w-6xl px-4 pb-10 md:px-6">
            <div class="mb-6 h-px w-full bg-white/10"></div>
            <div class="flex flex-col items-start justify-between gap-4 md:flex-row md:items-center">
                <div>
                    <div class="text-sm font-semibold">{SITE_NAME}</div>
                    <div class="text-xs text-white/60">"Sua ilha de realidades — nós codificamos o resto."</div>
                </div>
                <div class="text-xs text-white/50">{format!("© {year} {SITE_NAME}.")}</div>
            </div>
        </footer>
    }
}

/// Page-level styles that Tailwind utilities cannot express
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            html,
            body {
                overflow-x: hidden;
                background: #05070b;
            }

            .rv-aurora {
                background: radial-gradient(600px circle at 30% 20%, rgba(0, 229, 255, 0.18), transparent 55%),
                    radial-gradient(520px circle at 70% 60%, rgba(0, 255, 138, 0.12), transparent 56%),
                    radial-gradient(520px circle at 60% 10%, rgba(255, 255, 255, 0.08), transparent 50%);
                filter: blur(10px);
                animation: rvAurora 10s ease-in-out infinite;
            }

            .rv-scan {
                background: linear-gradient(to bottom, transparent 0%, rgba(255, 255, 255, 0.08) 45%, transparent 70%);
                transform: translateY(-60%);
                animation: rvScan 7s ease-in-out infinite;
                mix-blend-mode: screen;
            }

            @keyframes rvAurora {
                0% { transform: translate3d(-2%, -1%, 0) scale(1.02); opacity: 0.55; }
                50% { transform: translate3d(2%, 1%, 0) scale(1.05); opacity: 0.7; }
                100% { transform: translate3d(-2%, -1%, 0) scale(1.02); opacity: 0.55; }
            }

            @keyframes rvScan {
                0% { transform: translateY(-70%); opacity: 0.15; }
                50% { transform: translateY(0%); opacity: 0.25; }
                100% { transform: translateY(70%); opacity: 0.15; }
            }

            @media (prefers-reduced-motion: reduce) {
                .rv-aurora,
                .rv-scan {
                    animation: none !important;
                }
            }
            "#
        </style>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_labels_fade() {
        let opacities: Vec<String> = (0..HERO_STATS.len())
            .map(|i| format!("{:.2}", phase_opacity(i)))
            .collect();
        assert_eq!(opacities, ["0.85", "0.77", "0.69", "0.61"]);
    }

    #[test]
    fn test_nav_targets_exist_on_page() {
        let anchors = ["#servicos", "#processo", "#faq", "#contato"];
        assert!(NAV_LINKS.iter().all(|(href, _)| anchors.contains(href)));
    }
}
