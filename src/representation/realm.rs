//! Realm representation
//!
//! Mirrors the admin API's realm document. Nested entities that have no
//! representation of their own here (users, clients, roles, flows, ...) are
//! kept as untyped JSON so realm exports still decode.

use serde_json::Value;
use std::collections::BTreeMap;

crate::representation! {
    /// A realm as exchanged with `/admin/realms`
    pub struct Realm {
        /// Internal realm id
        id / with_id: String => "id",
        /// Realm name, used in every realm-scoped path
        realm / with_realm: String => "realm",
        display_name / with_display_name: String => "displayName",
        display_name_html / with_display_name_html: String => "displayNameHtml",
        enabled / with_enabled: bool => "enabled",
        not_before / with_not_before: i64 => "notBefore",
        default_signature_algorithm / with_default_signature_algorithm: String => "defaultSignatureAlgorithm",
        revoke_refresh_token / with_revoke_refresh_token: bool => "revokeRefreshToken",
        refresh_token_max_reuse / with_refresh_token_max_reuse: i64 => "refreshTokenMaxReuse",

        // Token and session lifespans, in seconds
        access_token_lifespan / with_access_token_lifespan: i64 => "accessTokenLifespan",
        access_token_lifespan_for_implicit_flow / with_access_token_lifespan_for_implicit_flow: i64 => "accessTokenLifespanForImplicitFlow",
        sso_session_idle_timeout / with_sso_session_idle_timeout: i64 => "ssoSessionIdleTimeout",
        sso_session_max_lifespan / with_sso_session_max_lifespan: i64 => "ssoSessionMaxLifespan",
        sso_session_idle_timeout_remember_me / with_sso_session_idle_timeout_remember_me: i64 => "ssoSessionIdleTimeoutRememberMe",
        sso_session_max_lifespan_remember_me / with_sso_session_max_lifespan_remember_me: i64 => "ssoSessionMaxLifespanRememberMe",
        offline_session_idle_timeout / with_offline_session_idle_timeout: i64 => "offlineSessionIdleTimeout",
        offline_session_max_lifespan_enabled / with_offline_session_max_lifespan_enabled: bool => "offlineSessionMaxLifespanEnabled",
        offline_session_max_lifespan / with_offline_session_max_lifespan: i64 => "offlineSessionMaxLifespan",
        client_session_idle_timeout / with_client_session_idle_timeout: i64 => "clientSessionIdleTimeout",
        client_session_max_lifespan / with_client_session_max_lifespan: i64 => "clientSessionMaxLifespan",
        client_offline_session_idle_timeout / with_client_offline_session_idle_timeout: i64 => "clientOfflineSessionIdleTimeout",
        client_offline_session_max_lifespan / with_client_offline_session_max_lifespan: i64 => "clientOfflineSessionMaxLifespan",
        access_code_lifespan / with_access_code_lifespan: i64 => "accessCodeLifespan",
        access_code_lifespan_user_action / with_access_code_lifespan_user_action: i64 => "accessCodeLifespanUserAction",
        access_code_lifespan_login / with_access_code_lifespan_login: i64 => "accessCodeLifespanLogin",
        action_token_generated_by_admin_lifespan / with_action_token_generated_by_admin_lifespan: i64 => "actionTokenGeneratedByAdminLifespan",
        action_token_generated_by_user_lifespan / with_action_token_generated_by_user_lifespan: i64 => "actionTokenGeneratedByUserLifespan",
        oauth2_device_code_lifespan / with_oauth2_device_code_lifespan: i64 => "oauth2DeviceCodeLifespan",
        oauth2_device_polling_interval / with_oauth2_device_polling_interval: i64 => "oauth2DevicePollingInterval",

        // Login and registration
        ssl_required / with_ssl_required: String => "sslRequired",
        registration_allowed / with_registration_allowed: bool => "registrationAllowed",
        registration_email_as_username / with_registration_email_as_username: bool => "registrationEmailAsUsername",
        remember_me / with_remember_me: bool => "rememberMe",
        verify_email / with_verify_email: bool => "verifyEmail",
        login_with_email_allowed / with_login_with_email_allowed: bool => "loginWithEmailAllowed",
        duplicate_emails_allowed / with_duplicate_emails_allowed: bool => "duplicateEmailsAllowed",
        reset_password_allowed / with_reset_password_allowed: bool => "resetPasswordAllowed",
        edit_username_allowed / with_edit_username_allowed: bool => "editUsernameAllowed",
        user_cache_enabled / with_user_cache_enabled: bool => "userCacheEnabled",
        realm_cache_enabled / with_realm_cache_enabled: bool => "realmCacheEnabled",

        // Brute force detection
        brute_force_protected / with_brute_force_protected: bool => "bruteForceProtected",
        permanent_lockout / with_permanent_lockout: bool => "permanentLockout",
        max_temporary_lockouts / with_max_temporary_lockouts: i64 => "maxTemporaryLockouts",
        brute_force_strategy / with_brute_force_strategy: String => "bruteForceStrategy",
        max_failure_wait_seconds / with_max_failure_wait_seconds: i64 => "maxFailureWaitSeconds",
        minimum_quick_login_wait_seconds / with_minimum_quick_login_wait_seconds: i64 => "minimumQuickLoginWaitSeconds",
        wait_increment_seconds / with_wait_increment_seconds: i64 => "waitIncrementSeconds",
        quick_login_check_milli_seconds / with_quick_login_check_milli_seconds: i64 => "quickLoginCheckMilliSeconds",
        max_delta_time_seconds / with_max_delta_time_seconds: i64 => "maxDeltaTimeSeconds",
        failure_factor / with_failure_factor: i64 => "failureFactor",

        // Realm keys, as accepted by older servers
        private_key / with_private_key: String => "privateKey",
        public_key / with_public_key: String => "publicKey",
        certificate / with_certificate: String => "certificate",
        code_secret / with_code_secret: String => "codeSecret",

        // Credentials and OTP policy
        default_role / with_default_role: Value => "defaultRole",
        default_roles / with_default_roles: Vec<String> => "defaultRoles",
        required_credentials / with_required_credentials: Vec<String> => "requiredCredentials",
        password_policy / with_password_policy: String => "passwordPolicy",
        otp_policy_type / with_otp_policy_type: String => "otpPolicyType",
        otp_policy_algorithm / with_otp_policy_algorithm: String => "otpPolicyAlgorithm",
        otp_policy_initial_counter / with_otp_policy_initial_counter: i64 => "otpPolicyInitialCounter",
        otp_policy_digits / with_otp_policy_digits: i64 => "otpPolicyDigits",
        otp_policy_look_ahead_window / with_otp_policy_look_ahead_window: i64 => "otpPolicyLookAheadWindow",
        otp_policy_period / with_otp_policy_period: i64 => "otpPolicyPeriod",
        otp_policy_code_reusable / with_otp_policy_code_reusable: bool => "otpPolicyCodeReusable",
        otp_supported_applications / with_otp_supported_applications: Vec<String> => "otpSupportedApplications",

        // WebAuthn two-factor policy
        web_authn_policy_rp_entity_name / with_web_authn_policy_rp_entity_name: String => "webAuthnPolicyRpEntityName",
        web_authn_policy_signature_algorithms / with_web_authn_policy_signature_algorithms: Vec<String> => "webAuthnPolicySignatureAlgorithms",
        web_authn_policy_rp_id / with_web_authn_policy_rp_id: String => "webAuthnPolicyRpId",
        web_authn_policy_attestation_conveyance_preference / with_web_authn_policy_attestation_conveyance_preference: String => "webAuthnPolicyAttestationConveyancePreference",
        web_authn_policy_authenticator_attachment / with_web_authn_policy_authenticator_attachment: String => "webAuthnPolicyAuthenticatorAttachment",
        web_authn_policy_require_resident_key / with_web_authn_policy_require_resident_key: String => "webAuthnPolicyRequireResidentKey",
        web_authn_policy_user_verification_requirement / with_web_authn_policy_user_verification_requirement: String => "webAuthnPolicyUserVerificationRequirement",
        web_authn_policy_create_timeout / with_web_authn_policy_create_timeout: i64 => "webAuthnPolicyCreateTimeout",
        web_authn_policy_avoid_same_authenticator_register / with_web_authn_policy_avoid_same_authenticator_register: bool => "webAuthnPolicyAvoidSameAuthenticatorRegister",
        web_authn_policy_acceptable_aaguids / with_web_authn_policy_acceptable_aaguids: Vec<String> => "webAuthnPolicyAcceptableAaguids",
        web_authn_policy_extra_origins / with_web_authn_policy_extra_origins: Vec<String> => "webAuthnPolicyExtraOrigins",

        // WebAuthn passwordless policy
        web_authn_policy_passwordless_rp_entity_name / with_web_authn_policy_passwordless_rp_entity_name: String => "webAuthnPolicyPasswordlessRpEntityName",
        web_authn_policy_passwordless_signature_algorithms / with_web_authn_policy_passwordless_signature_algorithms: Vec<String> => "webAuthnPolicyPasswordlessSignatureAlgorithms",
        web_authn_policy_passwordless_rp_id / with_web_authn_policy_passwordless_rp_id: String => "webAuthnPolicyPasswordlessRpId",
        web_authn_policy_passwordless_attestation_conveyance_preference / with_web_authn_policy_passwordless_attestation_conveyance_preference: String => "webAuthnPolicyPasswordlessAttestationConveyancePreference",
        web_authn_policy_passwordless_authenticator_attachment / with_web_authn_policy_passwordless_authenticator_attachment: String => "webAuthnPolicyPasswordlessAuthenticatorAttachment",
        web_authn_policy_passwordless_require_resident_key / with_web_authn_policy_passwordless_require_resident_key: String => "webAuthnPolicyPasswordlessRequireResidentKey",
        web_authn_policy_passwordless_user_verification_requirement / with_web_authn_policy_passwordless_user_verification_requirement: String => "webAuthnPolicyPasswordlessUserVerificationRequirement",
        web_authn_policy_passwordless_create_timeout / with_web_authn_policy_passwordless_create_timeout: i64 => "webAuthnPolicyPasswordlessCreateTimeout",
        web_authn_policy_passwordless_avoid_same_authenticator_register / with_web_authn_policy_passwordless_avoid_same_authenticator_register: bool => "webAuthnPolicyPasswordlessAvoidSameAuthenticatorRegister",
        web_authn_policy_passwordless_acceptable_aaguids / with_web_authn_policy_passwordless_acceptable_aaguids: Vec<String> => "webAuthnPolicyPasswordlessAcceptableAaguids",
        web_authn_policy_passwordless_extra_origins / with_web_authn_policy_passwordless_extra_origins: Vec<String> => "webAuthnPolicyPasswordlessExtraOrigins",
        web_authn_policy_passwordless_passkeys_enabled / with_web_authn_policy_passwordless_passkeys_enabled: bool => "webAuthnPolicyPasswordlessPasskeysEnabled",

        // Client policies
        client_profiles / with_client_profiles: Value => "clientProfiles",
        client_policies / with_client_policies: Value => "clientPolicies",

        // Headers, mail, themes
        browser_security_headers / with_browser_security_headers: BTreeMap<String, String> => "browserSecurityHeaders",
        smtp_server / with_smtp_server: BTreeMap<String, String> => "smtpServer",
        login_theme / with_login_theme: String => "loginTheme",
        account_theme / with_account_theme: String => "accountTheme",
        admin_theme / with_admin_theme: String => "adminTheme",
        email_theme / with_email_theme: String => "emailTheme",
        internationalization_enabled / with_internationalization_enabled: bool => "internationalizationEnabled",
        supported_locales / with_supported_locales: Vec<String> => "supportedLocales",
        default_locale / with_default_locale: String => "defaultLocale",
        localization_texts / with_localization_texts: Value => "localizationTexts",

        // Events
        events_enabled / with_events_enabled: bool => "eventsEnabled",
        events_expiration / with_events_expiration: i64 => "eventsExpiration",
        events_listeners / with_events_listeners: Vec<String> => "eventsListeners",
        enabled_event_types / with_enabled_event_types: Vec<String> => "enabledEventTypes",
        admin_events_enabled / with_admin_events_enabled: bool => "adminEventsEnabled",
        admin_events_details_enabled / with_admin_events_details_enabled: bool => "adminEventsDetailsEnabled",

        // Flow bindings
        browser_flow / with_browser_flow: String => "browserFlow",
        registration_flow / with_registration_flow: String => "registrationFlow",
        direct_grant_flow / with_direct_grant_flow: String => "directGrantFlow",
        reset_credentials_flow / with_reset_credentials_flow: String => "resetCredentialsFlow",
        client_authentication_flow / with_client_authentication_flow: String => "clientAuthenticationFlow",
        docker_authentication_flow / with_docker_authentication_flow: String => "dockerAuthenticationFlow",
        first_broker_login_flow / with_first_broker_login_flow: String => "firstBrokerLoginFlow",

        attributes / with_attributes: BTreeMap<String, String> => "attributes",
        user_managed_access_allowed / with_user_managed_access_allowed: bool => "userManagedAccessAllowed",
        keycloak_version / with_keycloak_version: String => "keycloakVersion",
        organizations_enabled / with_organizations_enabled: bool => "organizationsEnabled",
        verifiable_credentials_enabled / with_verifiable_credentials_enabled: bool => "verifiableCredentialsEnabled",
        admin_permissions_enabled / with_admin_permissions_enabled: bool => "adminPermissionsEnabled",

        // Export-only content
        roles / with_roles: Value => "roles",
        groups / with_groups: Value => "groups",
        default_groups / with_default_groups: Vec<String> => "defaultGroups",
        users / with_users: Value => "users",
        federated_users / with_federated_users: Value => "federatedUsers",
        clients / with_clients: Value => "clients",
        client_scopes / with_client_scopes: Value => "clientScopes",
        default_default_client_scopes / with_default_default_client_scopes: Vec<String> => "defaultDefaultClientScopes",
        default_optional_client_scopes / with_default_optional_client_scopes: Vec<String> => "defaultOptionalClientScopes",
        scope_mappings / with_scope_mappings: Value => "scopeMappings",
        client_scope_mappings / with_client_scope_mappings: Value => "clientScopeMappings",
        identity_providers / with_identity_providers: Value => "identityProviders",
        identity_provider_mappers / with_identity_provider_mappers: Value => "identityProviderMappers",
        protocol_mappers / with_protocol_mappers: Value => "protocolMappers",
        components / with_components: Value => "components",
        authentication_flows / with_authentication_flows: Value => "authenticationFlows",
        authenticator_config / with_authenticator_config: Value => "authenticatorConfig",
        required_actions / with_required_actions: Value => "requiredActions",
        user_federation_providers / with_user_federation_providers: Value => "userFederationProviders",
        user_federation_mappers / with_user_federation_mappers: Value => "userFederationMappers",
        organizations / with_organizations: Value => "organizations",
        admin_permissions_client / with_admin_permissions_client: Value => "adminPermissionsClient",

        // Legacy export content
        social / with_social: bool => "social",
        update_profile_on_initial_social_login / with_update_profile_on_initial_social_login: bool => "updateProfileOnInitialSocialLogin",
        social_providers / with_social_providers: BTreeMap<String, String> => "socialProviders",
        applications / with_applications: Value => "applications",
        application_scope_mappings / with_application_scope_mappings: Value => "applicationScopeMappings",
        oauth_clients / with_oauth_clients: Value => "oauthClients",
        client_templates / with_client_templates: Value => "clientTemplates",
    }
}
