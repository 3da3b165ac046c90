use crate::layout::global_context::use_site;
use crate::shared::components::card_animated::stagger;
use crate::shared::components::{
    CardAnimated, FallbackImage, FaqList, PageHeader, Reveal, SectionHeading,
};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    let site = use_site();

    view! {
        <div class="page page--about">
            <PageHeader intro=Signal::derive(move || site.content.with(|c| c.about_intro.clone())) />
            <section class="section">
                <div class="container">
                    <AboutSections />
                </div>
            </section>
        </div>
    }
}

/// Story, values, team, testimonials and FAQ.
///
/// Also embedded in the home page of the compact variant.
#[component]
pub fn AboutSections() -> impl IntoView {
    let site = use_site();
    let about = move || site.content.with(|c| c.about.clone());

    view! {
        <div class="about">
            <div class="about__story">
                <Reveal class="about__story-text">
                    <h2>{move || about().story_heading}</h2>
                    {move || about().story.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}
                </Reveal>
                <Reveal class="about__collage" delay_ms=150>
                    {move || {
                        about()
                            .story_images
                            .into_iter()
                            .map(|image| view! {
                                <FallbackImage src=image.url alt=image.alt class="about__collage-image" />
                            })
                            .collect_view()
                    }}
                </Reveal>
            </div>

            <div class="about__block">
                <SectionHeading
                    title="Our Values"
                    subtitle=Signal::derive(move || site.content.with(|c| c.about.values_intro.clone()))
                />
                <div class="grid grid--3">
                    {move || {
                        about()
                            .values
                            .into_iter()
                            .enumerate()
                            .map(|(i, value)| view! {
                                <CardAnimated delay_ms=stagger(i) class="value-card">
                                    <div class="value-card__icon">{icon(&value.icon)}</div>
                                    <h3>{value.title}</h3>
                                    <p>{value.description}</p>
                                </CardAnimated>
                            })
                            .collect_view()
                    }}
                </div>
            </div>

            <div class="about__block">
                <SectionHeading
                    title="Meet Our Team"
                    subtitle=Signal::derive(move || site.content.with(|c| c.about.team_intro.clone()))
                />
                <div class="grid grid--4">
                    {move || {
                        about()
                            .team
                            .into_iter()
                            .enumerate()
                            .map(|(i, member)| view! {
                                <Reveal class="team-card" delay_ms=stagger(i)>
                                    <FallbackImage src=member.image_url alt=member.name.clone() class="team-card__photo" />
                                    <h3 class="team-card__name">{member.name}</h3>
                                    <p class="team-card__role">{member.role}</p>
                                    <p class="team-card__bio">{member.bio}</p>
                                </Reveal>
                            })
                            .collect_view()
                    }}
                </div>
            </div>

            <div class="about__block">
                <SectionHeading title="What Our Residents Say" />
                <div class="grid grid--3">
                    {move || {
                        about()
                            .testimonials
                            .into_iter()
                            .map(|t| view! {
                                <Reveal class="testimonial">
                                    <blockquote class="testimonial__quote">{t.quote}</blockquote>
                                    <p class="testimonial__author">{t.author}</p>
                                    <p class="testimonial__detail">{t.detail}</p>
                                </Reveal>
                            })
                            .collect_view()
                    }}
                </div>
            </div>

            <div class="about__block">
                <SectionHeading title="Frequently Asked Questions" />
                <FaqList faqs=Signal::derive(move || site.content.with(|c| c.about.faqs.clone())) />
            </div>
        </div>
    }
}
