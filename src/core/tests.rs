//! End-to-end scenarios across the interaction components

#[cfg(test)]
mod tests {
    use crate::core::contact::resolve_submission;
    use crate::core::lifecycle::testing::CountingHost;
    use crate::core::{
        ChannelPrecedence, ContactPayload, Handoff, PointerTracker, Rect, RevealController,
        SiteConfig, Subscription, Subscriptions, Visibility, build_mail_link,
    };

    /// Mirror of what a mounted card does: one listener per event it tracks,
    /// a pending frame that must be cancelled on unmount.
    struct MountedCard {
        tracker: PointerTracker,
        listeners: Subscriptions,
    }

    impl MountedCard {
        fn mount(host: &CountingHost) -> Self {
            let mut listeners = Subscriptions::new();
            listeners.push(host.listen()); // pointermove
            listeners.push(host.listen()); // pointerleave
            Self {
                tracker: PointerTracker::tilt(),
                listeners,
            }
        }

        fn unmount(mut self) -> bool {
            let had_frame = self.tracker.cancel();
            self.listeners.clear();
            had_frame
        }
    }

    #[test]
    fn test_card_unmount_with_pending_frame_returns_to_baseline() {
        let host = CountingHost::new();
        let rect = Rect::new(0.0, 0.0, 320.0, 380.0);

        let mut card = MountedCard::mount(&host);
        assert_eq!(host.live(), 2);

        assert!(card.tracker.on_move(&rect, 10.0, 10.0));
        assert!(card.unmount());
        assert_eq!(host.live(), 0);
    }

    #[test]
    fn test_many_cards_mount_and_unmount() {
        let host = CountingHost::new();
        let cards: Vec<_> = (0..4).map(|_| MountedCard::mount(&host)).collect();
        assert_eq!(host.live(), 8);

        for card in cards {
            card.unmount();
        }
        assert_eq!(host.live(), 0);
    }

    #[test]
    fn test_window_glow_listener_is_released_with_component() {
        let host = CountingHost::new();
        {
            let mut subs = Subscriptions::new();
            subs.push(host.listen());
            let mut glow = PointerTracker::glow();
            let hero = Rect::new(0.0, 80.0, 1200.0, 600.0);
            glow.on_move(&hero, 600.0, 380.0);
            glow.on_frame();
            assert_eq!(host.live(), 1);
        }
        assert_eq!(host.live(), 0);
    }

    #[test]
    fn test_reveal_scrolled_past_and_back() {
        let host = CountingHost::new();
        let mut reveal = RevealController::new(80);
        reveal.attach(host.listen());

        let reports = [
            Visibility::new(false, 0.0),
            Visibility::new(true, 0.04),
            Visibility::new(true, 0.2),
            Visibility::new(false, 0.0),
            Visibility::new(true, 0.9),
        ];
        let fired: Vec<bool> = reports.into_iter().map(|v| reveal.on_visibility(v)).collect();

        assert_eq!(fired, vec![false, false, true, false, false]);
        assert!(reveal.state().is_revealed());
        assert_eq!(host.live(), 0);
        reveal.teardown();
        assert_eq!(host.live(), 0);
    }

    #[test]
    fn test_hidden_element_never_reveals() {
        let host = CountingHost::new();
        let mut reveal = RevealController::default();
        reveal.attach(host.listen());
        for _ in 0..10 {
            reveal.on_visibility(Visibility::new(false, 0.0));
        }
        assert!(!reveal.state().is_revealed());
        assert!(reveal.is_observing());

        drop(reveal);
        assert_eq!(host.live(), 0);
    }

    #[test]
    fn test_form_submission_keeps_fields_in_order() {
        let config = SiteConfig::default();
        let payload = ContactPayload::new(
            "Maria & Cia",
            "+55 41 99999-0000",
            "Preciso de um app?\nCom #pagamentos",
        );

        let handoff =
            resolve_submission(&payload, &config.destinations, &config.precedence).unwrap();
        let Handoff::Navigate(url) = handoff else {
            panic!("email destination should navigate in place");
        };

        assert_eq!(
            url,
            build_mail_link(
                "contato.rvlandd@gmail.com",
                "Projeto RVLand — Maria & Cia",
                "Nome: Maria & Cia\nContato: +55 41 99999-0000\n\nMensagem:\nPreciso de um app?\nCom #pagamentos",
            )
        );

        let body = url.split("&body=").nth(1).unwrap();
        let decoded = urlencoding::decode(body).unwrap();
        assert_eq!(decoded, payload.body());
        assert!(!body.contains('&'));
        assert!(!body.contains('#'));
        assert!(!body.contains('?'));
    }

    #[test]
    fn test_messaging_only_site_opens_new_context() {
        let config = SiteConfig::from_values("554184891365", "", "email,whatsapp").unwrap();
        let handoff = resolve_submission(
            &ContactPayload::new("Ana", "ana@x.com", "Oi"),
            &config.destinations,
            &config.precedence,
        )
        .unwrap();

        assert!(matches!(handoff, Handoff::OpenNewContext(_)));
        let text = handoff.url().split("?text=").nth(1).unwrap();
        assert_eq!(
            urlencoding::decode(text).unwrap(),
            "Olá! Segue minha mensagem:\n\nNome: Ana\nContato: ana@x.com\n\nMensagem:\nOi"
        );
    }

    #[test]
    fn test_unconfigured_site_submission_is_noop() {
        let config = SiteConfig::from_values("", "", "whatsapp,email").unwrap();
        assert_eq!(config.cta_messaging_link(), "");
        assert_eq!(
            resolve_submission(
                &ContactPayload::new("a", "b", "c"),
                &config.destinations,
                &ChannelPrecedence::default()
            ),
            None
        );
    }

    #[test]
    fn test_noop_subscription_counts_nothing() {
        let host = CountingHost::new();
        let mut subs = Subscriptions::new();
        subs.push(Subscription::noop());
        subs.push(host.listen());
        assert_eq!(host.live(), 1);
        subs.clear();
        assert_eq!(host.live(), 0);
    }
}
