use anyhow::Result;

use super::LocalStore;

impl LocalStore {
    pub fn get_token(&self) -> Result<Option<String>> {
        Ok(self.read_state()?.token.filter(|t| !t.is_empty()))
    }

    pub fn set_token(&self, token: &str) -> Result<()> {
        let mut st = self.read_state()?;
        st.token = Some(token.to_string());
        self.write_state(&st)
    }

    pub fn clear_token(&self) -> Result<()> {
        let mut st = self.read_state()?;
        st.token = None;
        self.write_state(&st)
    }
}
