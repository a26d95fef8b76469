use dioxus::prelude::*;

use ui::views::CategoryGrid;
use ui::{Banner, HowItWorks, StatsSection};

use crate::Route;

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();

    rsx! {
        Banner {
            on_find_tutors: move |_| {
                nav.push(Route::FindTutors {});
            },
        }
        CategoryGrid {
            on_select: move |category: domain::Category| {
                nav.push(Route::FindTutorsByCategory { category: category.title });
            },
        }
        StatsSection {}
        HowItWorks {}
    }
}
