//! Team member card for the team page.

use maud::{Markup, html};

use crate::avatar;
use crate::team::TeamMember;

const AVATAR_SIZE: u32 = 96;

/// Renders one member card.
///
/// Members with a portrait URL show it; everyone else gets a generated
/// hexagon avatar. Social links open in new tabs.
pub fn team_card(member: &TeamMember) -> Markup {
    html! {
        div class="team-card" {
            @match &member.image {
                Some(url) => {
                    img class="team-portrait" src=(url) alt=(member.name) loading="lazy";
                }
                None => (avatar::render(&member.name, AVATAR_SIZE)),
            }
            h2 class="team-name" { (member.name) }
            @if !member.description.is_empty() {
                p class="team-description" { (member.description) }
            }
            @if !member.socials.is_empty() {
                div class="team-socials" {
                    @for (label, url) in &member.socials {
                        a href=(url) target="_blank" rel="noopener noreferrer" { (label) }
                    }
                }
            }
        }
    }
}
