use serenity::all::{Member, UserId};

/// Guild member whose voice state changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceMember {
    pub user_id: UserId,
    /// Nickname, global name or username, whichever Discord shows in the guild.
    pub display_name: String,
    /// Bot accounts never trigger channel creation or deletion.
    pub bot: bool,
}

impl VoiceMember {
    pub fn from_member(member: &Member) -> Self {
        Self {
            user_id: member.user.id,
            display_name: member.display_name().to_string(),
            bot: member.user.bot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::create_test_member;

    #[test]
    fn uses_guild_display_name() {
        let mut member = create_test_member(123, 42, "ann", false);
        member.nick = Some("Ann".to_string());

        let voice_member = VoiceMember::from_member(&member);

        assert_eq!(voice_member.user_id, UserId::new(42));
        assert_eq!(voice_member.display_name, "Ann");
        assert!(!voice_member.bot);
    }

    #[test]
    fn falls_back_to_username() {
        let member = create_test_member(123, 99, "music-bot", true);

        let voice_member = VoiceMember::from_member(&member);

        assert_eq!(voice_member.display_name, "music-bot");
        assert!(voice_member.bot);
    }
}
