// SPDX-License-Identifier: MIT OR Apache-2.0

//! Inline stroke icons (24x24 grid, `currentColor`).

use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    AlertTriangle,
    ArrowRight,
    Award,
    BarChart,
    Brain,
    Building,
    Calendar,
    CheckCircle,
    ChevronDown,
    ChevronLeft,
    ChevronRight,
    Clock,
    Cloud,
    Cpu,
    DollarSign,
    Eye,
    Globe,
    Hand,
    Heart,
    Mail,
    MapPin,
    Menu,
    MessageSquare,
    Mic,
    Phone,
    Play,
    Send,
    Shield,
    Smartphone,
    Sparkles,
    Star,
    Target,
    TrendingUp,
    User,
    Users,
    X,
    Zap,
}

impl IconKind {
    fn paths(self) -> &'static [&'static str] {
        match self {
            Self::AlertTriangle => &[
                "M10.29 3.86 1.82 18a2 2 0 0 0 1.71 3h16.94a2 2 0 0 0 1.71-3L13.71 3.86a2 2 0 0 0-3.42 0z",
                "M12 9v4",
                "M12 17h.01",
            ],
            Self::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            Self::Award => &[
                "M12 15a7 7 0 1 0 0-14 7 7 0 0 0 0 14z",
                "M8.21 13.89 7 23l5-3 5 3-1.21-9.12",
            ],
            Self::BarChart => &["M12 20V10", "M18 20V4", "M6 20v-4"],
            Self::Brain => &[
                "M9.5 2A2.5 2.5 0 0 1 12 4.5v15a2.5 2.5 0 0 1-4.96.44 2.5 2.5 0 0 1-2.96-3.08 3 3 0 0 1-.34-5.58 2.5 2.5 0 0 1 1.32-4.24 2.5 2.5 0 0 1 1.98-3A2.5 2.5 0 0 1 9.5 2z",
                "M14.5 2A2.5 2.5 0 0 0 12 4.5v15a2.5 2.5 0 0 0 4.96.44 2.5 2.5 0 0 0 2.96-3.08 3 3 0 0 0 .34-5.58 2.5 2.5 0 0 0-1.32-4.24 2.5 2.5 0 0 0-1.98-3A2.5 2.5 0 0 0 14.5 2z",
            ],
            Self::Building => &[
                "M4 2h16v20H4z",
                "M9 22v-4h6v4",
                "M8 6h.01M16 6h.01M12 6h.01M12 10h.01M12 14h.01M16 10h.01M16 14h.01M8 10h.01M8 14h.01",
            ],
            Self::Calendar => &["M3 4h18v18H3z", "M16 2v4", "M8 2v4", "M3 10h18"],
            Self::CheckCircle => &["M22 11.08V12a10 10 0 1 1-5.93-9.14", "M22 4 12 14.01l-3-3"],
            Self::ChevronDown => &["m6 9 6 6 6-6"],
            Self::ChevronLeft => &["m15 18-6-6 6-6"],
            Self::ChevronRight => &["m9 18 6-6-6-6"],
            Self::Clock => &["M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z", "M12 6v6l4 2"],
            Self::Cloud => &["M17.5 19H9a7 7 0 1 1 6.71-9h1.79a4.5 4.5 0 1 1 0 9z"],
            Self::Cpu => &[
                "M4 4h16v16H4z",
                "M9 9h6v6H9z",
                "M9 1v3M15 1v3M9 20v3M15 20v3M20 9h3M20 14h3M1 9h3M1 14h3",
            ],
            Self::DollarSign => &["M12 1v22", "M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6"],
            Self::Eye => &[
                "M1 12s4-8 11-8 11 8 11 8-4 8-11 8-11-8-11-8z",
                "M12 15a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
            ],
            Self::Globe => &[
                "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z",
                "M2 12h20",
                "M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z",
            ],
            Self::Hand => &[
                "M18 11V6a2 2 0 0 0-4 0v5",
                "M14 10V4a2 2 0 0 0-4 0v6",
                "M10 10.5V6a2 2 0 0 0-4 0v8",
                "M18 8a2 2 0 1 1 4 0v6a8 8 0 0 1-8 8h-2c-2.8 0-4.5-.86-5.99-2.34l-3.6-3.6a2 2 0 0 1 2.83-2.82L7 15",
            ],
            Self::Heart => &[
                "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7z",
            ],
            Self::Mail => &[
                "M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z",
                "m22 6-10 7L2 6",
            ],
            Self::MapPin => &[
                "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0z",
                "M12 13a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
            ],
            Self::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            Self::MessageSquare => &["M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"],
            Self::Mic => &[
                "M12 1a3 3 0 0 0-3 3v8a3 3 0 0 0 6 0V4a3 3 0 0 0-3-3z",
                "M19 10v2a7 7 0 0 1-14 0v-2",
                "M12 19v4M8 23h8",
            ],
            Self::Phone => &[
                "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92z",
            ],
            Self::Play => &["m5 3 14 9-14 9V3z"],
            Self::Send => &["m22 2-7 20-4-9-9-4z", "M22 2 11 13"],
            Self::Shield => &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"],
            Self::Smartphone => &["M7 2h10a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z", "M12 18h.01"],
            Self::Sparkles => &[
                "m12 3-1.9 5.8a2 2 0 0 1-1.3 1.3L3 12l5.8 1.9a2 2 0 0 1 1.3 1.3L12 21l1.9-5.8a2 2 0 0 1 1.3-1.3L21 12l-5.8-1.9a2 2 0 0 1-1.3-1.3z",
            ],
            Self::Star => &[
                "m12 2 3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01z",
            ],
            Self::Target => &[
                "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z",
                "M12 18a6 6 0 1 0 0-12 6 6 0 0 0 0 12z",
                "M12 14a2 2 0 1 0 0-4 2 2 0 0 0 0 4z",
            ],
            Self::TrendingUp => &["m23 6-9.5 9.5-5-5L1 18", "M17 6h6v6"],
            Self::User => &[
                "M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2",
                "M12 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z",
            ],
            Self::Users => &[
                "M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2",
                "M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z",
                "M23 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            Self::X => &["M18 6 6 18", "m6 6 12 12"],
            Self::Zap => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
        }
    }
}

#[derive(Properties, Debug, PartialEq)]
pub struct IconProps {
    pub kind: IconKind,
    #[prop_or_else(|| "icon".into())]
    pub class: AttrValue,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    html! {
        <svg
            class={props.class.clone()}
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { for props.kind.paths().iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}
