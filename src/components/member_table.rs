use yew::prelude::*;

use crate::hooks::use_members;
use crate::models::MemberEntity;

#[function_component(MemberTable)]
pub fn member_table() -> Html {
    let members = use_members();

    let body = if members.loading {
        html! { <p class="members-loading">{"Loading members..."}</p> }
    } else if let Some(error) = members.error.clone() {
        html! { <p class="members-error">{ error }</p> }
    } else {
        html! {
            <table class="members-table">
                <thead>
                    <MemberHead />
                </thead>
                <tbody>
                    {
                        for members.members.iter().map(|member| html! {
                            <MemberRow key={member.id} member={member.clone()} />
                        })
                    }
                </tbody>
            </table>
        }
    };

    html! {
        <div class="members-page">
            <h2>{"Members"}</h2>
            { body }
        </div>
    }
}

#[function_component(MemberHead)]
fn member_head() -> Html {
    html! {
        <tr>
            <th>{"Avatar"}</th>
            <th>{"Id"}</th>
            <th>{"Name"}</th>
        </tr>
    }
}

#[derive(Properties, PartialEq)]
struct MemberRowProps {
    member: MemberEntity,
}

#[function_component(MemberRow)]
fn member_row(props: &MemberRowProps) -> Html {
    let member = &props.member;

    html! {
        <tr>
            <td>
                <img
                    src={member.avatar_url.clone()}
                    alt={member.login.clone()}
                    class="member-avatar"
                />
            </td>
            <td>{ member.id }</td>
            <td>{ member.login.clone() }</td>
        </tr>
    }
}
