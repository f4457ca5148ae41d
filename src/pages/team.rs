//! Team page generation.

use maud::{Markup, html};

use crate::components::{layout, team_card};
use crate::team::TeamMember;

/// Generates the team page as a card grid.
pub fn generate_team_page(site_name: &str, members: &[TeamMember]) -> Markup {
    let body = html! {
        header class="site-header" {
            h1 class="site-title" { "Team" }
        }

        main class="team-grid" {
            @if members.is_empty() {
                p class="empty-state" { "No members listed" }
            } @else {
                @for member in members {
                    (team_card::team_card(member))
                }
            }
        }
    };

    layout::page_wrapper("Team", site_name, &["assets/team.css"], &[], body)
}
