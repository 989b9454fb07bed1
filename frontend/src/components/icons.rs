//! Icon SVG nội tuyến theo bộ nét lucide, khỏi kéo thêm font icon.

use leptos::prelude::*;

macro_rules! icon {
    ($name:ident, $($d:expr),+ $(,)?) => {
        #[component]
        pub fn $name() -> impl IntoView {
            view! {
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                >
                    $(<path d=$d />)+
                </svg>
            }
        }
    };
}

icon!(
    Users,
    "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
    "M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z",
    "M22 21v-2a4 4 0 0 0-3-3.87",
    "M16 3.13a4 4 0 0 1 0 7.75",
);

icon!(
    FileText,
    "M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z",
    "M14 2v6h6",
    "M16 13H8",
    "M16 17H8",
    "M10 9H8",
);

icon!(
    FolderKanban,
    "M4 20h16a2 2 0 0 0 2-2V8a2 2 0 0 0-2-2h-7.9a2 2 0 0 1-1.69-.9L9.6 3.9A2 2 0 0 0 7.93 3H4a2 2 0 0 0-2 2v13a2 2 0 0 0 2 2z",
    "M8 10v4",
    "M12 10v2",
    "M16 10v6",
);

icon!(
    Award,
    "M12 15a7 7 0 1 0 0-14 7 7 0 0 0 0 14z",
    "M8.21 13.89 7 23l5-3 5 3-1.21-9.12",
);

icon!(
    Search,
    "M11 19a8 8 0 1 0 0-16 8 8 0 0 0 0 16z",
    "m21 21-4.35-4.35",
);

icon!(
    LogOut,
    "M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4",
    "m16 17 5-5-5-5",
    "M21 12H9",
);

icon!(Plus, "M12 5v14", "M5 12h14");

icon!(
    Pencil,
    "M17 3a2.85 2.83 0 1 1 4 4L7.5 20.5 2 22l1.5-5.5z",
    "m15 5 4 4",
);

icon!(
    Trash2,
    "M3 6h18",
    "M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6",
    "M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2",
    "M10 11v6",
    "M14 11v6",
);

icon!(
    Eye,
    "M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7z",
    "M12 15a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
);

icon!(
    Download,
    "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4",
    "m7 10 5 5 5-5",
    "M12 15V3",
);

icon!(
    Upload,
    "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4",
    "m17 8-5-5-5 5",
    "M12 3v12",
);

icon!(ChevronDown, "m6 9 6 6 6-6");

icon!(ChevronUp, "m18 15-6-6-6 6");

icon!(ArrowLeft, "m12 19-7-7 7-7", "M19 12H5");

icon!(
    RefreshCw,
    "M3 12a9 9 0 0 1 9-9 9.75 9.75 0 0 1 6.74 2.74L21 8",
    "M21 3v5h-5",
    "M21 12a9 9 0 0 1-9 9 9.75 9.75 0 0 1-6.74-2.74L3 16",
    "M3 21v-5h5",
);

icon!(
    FileSpreadsheet,
    "M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z",
    "M14 2v6h6",
    "M8 13h2",
    "M14 13h2",
    "M8 17h2",
    "M14 17h2",
);

icon!(
    UserRound,
    "M12 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z",
    "M6 21v-1a6 6 0 0 1 12 0v1",
);

icon!(
    Calendar,
    "M19 4H5a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6a2 2 0 0 0-2-2z",
    "M16 2v4",
    "M8 2v4",
    "M3 10h18",
);
