use crate::session::Session;

/// Outcome of checking a landlord-only page against the session.
#[derive(Debug, PartialEq, Eq)]
pub enum Gate<'a> {
    Allow { token: &'a str },
    Redirect(&'static str),
}

/// Where each landlord page sends visitors it refuses.
#[derive(Debug, Clone, Copy)]
pub struct LandlordGate {
    pub anonymous: &'static str,
    pub not_landlord: &'static str,
}

/// New listing form: anyone who is not a landlord goes home.
pub const CREATE_LISTING: LandlordGate = LandlordGate {
    anonymous: "/",
    not_landlord: "/",
};

/// Listing dashboard: log in first, tenants go home.
pub const DASHBOARD: LandlordGate = LandlordGate {
    anonymous: "/login",
    not_landlord: "/",
};

/// Edit form: anything short of a landlord session goes to login.
pub const EDIT_LISTING: LandlordGate = LandlordGate {
    anonymous: "/login",
    not_landlord: "/login",
};

impl LandlordGate {
    pub fn check<'a>(&self, session: &'a Session) -> Gate<'a> {
        let (Some(token), Some(user)) = (session.token.as_deref(), session.user.as_ref()) else {
            return Gate::Redirect(self.anonymous);
        };

        if !user.is_landlord() {
            return Gate::Redirect(self.not_landlord);
        }

        Gate::Allow { token }
    }
}
