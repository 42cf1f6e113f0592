use crate::modules::activities::use_cases::sign_up::command::SignUp;
use crate::modules::activities::use_cases::withdraw::command::Withdraw;

pub struct SignUpBuilder {
    inner: SignUp,
}

impl Default for SignUpBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl SignUpBuilder {
    pub fn new() -> Self {
        Self {
            inner: SignUp {
                activity_name: "Chess Club".to_string(),
                email: "newstudent@mergington.edu".to_string(),
            },
        }
    }

    pub fn activity_name(mut self, v: impl Into<String>) -> Self {
        self.inner.activity_name = v.into();
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn build(self) -> SignUp {
        self.inner
    }
}

pub struct WithdrawBuilder {
    inner: Withdraw,
}

impl Default for WithdrawBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl WithdrawBuilder {
    pub fn new() -> Self {
        Self {
            inner: Withdraw {
                activity_name: "Chess Club".to_string(),
                email: "michael@mergington.edu".to_string(),
            },
        }
    }

    pub fn activity_name(mut self, v: impl Into<String>) -> Self {
        self.inner.activity_name = v.into();
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn build(self) -> Withdraw {
        self.inner
    }
}
