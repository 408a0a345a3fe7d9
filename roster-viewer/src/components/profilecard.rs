use yew::prelude::*;
use roster_model::Profile;


#[derive(Clone, PartialEq, Properties)]
pub struct Props {
    pub profile: Profile,
}

/// One card of the grid view
#[function_component(ProfileCard)]
pub fn profile_card(props: &Props) -> Html {
    let profile = &props.profile;
    html! {
        <div class="profile-card">
            <img src={profile.image_url.clone()} alt={profile.full_name()} />
            <div class="profile-card-body">
                <h2>{ profile.full_name() }</h2>
                <p class="profile-card-job">{ profile.job_title.clone() }</p>
                <p class="profile-card-email">{ profile.email.clone() }</p>
            </div>
        </div>
    }
}
