use yew::prelude::*;
use roster_model::Profile;


#[derive(Clone, PartialEq, Properties)]
pub struct Props {
    pub profiles: Vec<Profile>,
}

/// Table view of the result set, one row per profile
#[function_component(ProfileTable)]
pub fn profile_table(props: &Props) -> Html {
    html! {
        <table class="profile-table">
            <thead>
                <tr>
                    <th>{"Image"}</th>
                    <th>{"Name"}</th>
                    <th>{"Job"}</th>
                    <th>{"Email"}</th>
                </tr>
            </thead>
            <tbody>
                { for props.profiles.iter().map(|profile| html! {
                    <tr key={profile.id.clone()}>
                        <td><img src={profile.image_url.clone()} alt={profile.first_name.clone()} /></td>
                        <td>{ profile.full_name() }</td>
                        <td>{ profile.job_title.clone() }</td>
                        <td>{ profile.email.clone() }</td>
                    </tr>
                }) }
            </tbody>
        </table>
    }
}
