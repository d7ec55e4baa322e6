//! Sample records and static page content every view starts from.

use chrono::{DateTime, TimeZone, Utc};

use crate::{
  message::{Message, MessageStatus, Priority},
  project::{Project, ProjectCategory},
  record::{RecordId, RecordStatus},
  service::Service,
  site::{
    Activity, ContactChannel, HeroStat, OpeningHours, PageViews, QuickAction,
    ServiceCard, Stat, TrafficSource,
  },
};

fn strings(items: &[&str]) -> Vec<String> {
  items.iter().map(|s| (*s).to_owned()).collect()
}

fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
  Utc
    .with_ymd_and_hms(year, month, day, hour, minute, 0)
    .single()
    .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn project(
  id: u64,
  title: &str,
  category: ProjectCategory,
  description: &str,
  image: &str,
  technologies: &[&str],
  links: (&str, &str),
  featured: bool,
) -> Project {
  Project {
    id: RecordId(id),
    title: title.to_owned(),
    category,
    description: description.to_owned(),
    image: image.to_owned(),
    technologies: strings(technologies),
    live_url: links.0.to_owned(),
    github_url: links.1.to_owned(),
    featured,
    status: RecordStatus::Active,
  }
}

// ─── Admin collections ────────────────────────────────────────────────────────

const EXAMPLE_LINKS: (&str, &str) = ("https://example.com", "https://github.com/example");

pub fn admin_projects() -> Vec<Project> {
  vec![
    project(
      1,
      "E-commerce Platform",
      ProjectCategory::Web,
      "Modern e-commerce solution with advanced features and seamless UX",
      "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=600&h=400&fit=crop",
      &["React", "Node.js", "Stripe", "AWS"],
      EXAMPLE_LINKS,
      true,
    ),
    project(
      2,
      "FinTech Mobile App",
      ProjectCategory::Mobile,
      "Secure financial management app with real-time transactions",
      "https://images.unsplash.com/photo-1512941937669-90a1b58e7e9c?w=600&h=400&fit=crop",
      &["React Native", "TypeScript", "Firebase"],
      EXAMPLE_LINKS,
      false,
    ),
  ]
}

pub fn admin_services() -> Vec<Service> {
  vec![
    Service {
      id:          RecordId(1),
      title:       "SEO Optimization".to_owned(),
      description: "Boost your search rankings and drive organic traffic with our advanced SEO strategies and technical expertise.".to_owned(),
      icon:        "Search".to_owned(),
      features:    strings(&["Keyword Research", "Technical SEO", "Content Optimization", "Link Building"]),
      price:       "$1,200/month".to_owned(),
      category:    "Marketing".to_owned(),
      status:      RecordStatus::Active,
      popular:     true,
    },
    Service {
      id:          RecordId(2),
      title:       "Web Development".to_owned(),
      description: "Create stunning, responsive websites that convert visitors into customers and deliver exceptional user experiences.".to_owned(),
      icon:        "Monitor".to_owned(),
      features:    strings(&["Custom Design", "Mobile-First", "E-commerce", "Performance Optimization"]),
      price:       "$5,000-15,000".to_owned(),
      category:    "Development".to_owned(),
      status:      RecordStatus::Active,
      popular:     false,
    },
    Service {
      id:          RecordId(3),
      title:       "Social Media Marketing".to_owned(),
      description: "Engage your audience across all platforms with compelling content and data-driven social media campaigns.".to_owned(),
      icon:        "Smartphone".to_owned(),
      features:    strings(&["Content Creation", "Community Management", "Paid Advertising", "Analytics"]),
      price:       "$800/month".to_owned(),
      category:    "Marketing".to_owned(),
      status:      RecordStatus::Active,
      popular:     true,
    },
  ]
}

pub fn inbox_messages() -> Vec<Message> {
  vec![
    Message {
      id:          RecordId(1),
      name:        "John Smith".to_owned(),
      email:       "john@techcorp.com".to_owned(),
      company:     Some("TechCorp Inc".to_owned()),
      subject:     "Website Redesign Project".to_owned(),
      body:        "Hi, I'm interested in discussing a complete website redesign for our company. We're looking for a modern, responsive design that reflects our brand values. Could we schedule a consultation?".to_owned(),
      received_at: utc(2024, 1, 15, 10, 30),
      status:      MessageStatus::Unread,
      priority:    Priority::High,
    },
    Message {
      id:          RecordId(2),
      name:        "Sarah Johnson".to_owned(),
      email:       "sarah@startup.io".to_owned(),
      company:     Some("StartupIO".to_owned()),
      subject:     "SEO Services Inquiry".to_owned(),
      body:        "We're a growing startup and need help with our SEO strategy. Our current organic traffic is quite low and we'd like to improve our search rankings.".to_owned(),
      received_at: utc(2024, 1, 14, 14, 20),
      status:      MessageStatus::Read,
      priority:    Priority::Medium,
    },
    Message {
      id:          RecordId(3),
      name:        "Mike Chen".to_owned(),
      email:       "mike@ecommerce.com".to_owned(),
      company:     None,
      subject:     "E-commerce Platform Development".to_owned(),
      body:        "Looking for a team to build a custom e-commerce platform with advanced features like inventory management, multi-vendor support, and analytics dashboard.".to_owned(),
      received_at: utc(2024, 1, 13, 9, 15),
      status:      MessageStatus::Replied,
      priority:    Priority::High,
    },
  ]
}

// ─── Public showcase ──────────────────────────────────────────────────────────

const PLACEHOLDER_LINKS: (&str, &str) = ("#", "#");

pub fn showcase_projects() -> Vec<Project> {
  vec![
    project(
      1,
      "E-commerce Platform",
      ProjectCategory::Web,
      "Modern e-commerce solution with advanced features and seamless UX",
      "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=600&h=400&fit=crop",
      &["React", "Node.js", "Stripe", "AWS"],
      PLACEHOLDER_LINKS,
      true,
    ),
    project(
      2,
      "FinTech Mobile App",
      ProjectCategory::Mobile,
      "Secure financial management app with real-time transactions",
      "https://images.unsplash.com/photo-1512941937669-90a1b58e7e9c?w=600&h=400&fit=crop",
      &["React Native", "TypeScript", "Firebase"],
      PLACEHOLDER_LINKS,
      false,
    ),
    project(
      3,
      "Brand Identity Design",
      ProjectCategory::Branding,
      "Complete rebrand for tech startup including logo and guidelines",
      "https://images.unsplash.com/photo-1558655146-364adaf1fcc9?w=600&h=400&fit=crop",
      &["Figma", "Illustrator", "After Effects"],
      PLACEHOLDER_LINKS,
      true,
    ),
    project(
      4,
      "Social Media Campaign",
      ProjectCategory::Marketing,
      "Viral marketing campaign that increased engagement by 300%",
      "https://images.unsplash.com/photo-1611224923853-80b023f02d71?w=600&h=400&fit=crop",
      &["Facebook Ads", "Instagram", "Analytics"],
      PLACEHOLDER_LINKS,
      false,
    ),
    project(
      5,
      "SaaS Dashboard",
      ProjectCategory::Web,
      "Analytics dashboard with real-time data visualization",
      "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=600&h=400&fit=crop",
      &["Vue.js", "D3.js", "Python", "PostgreSQL"],
      PLACEHOLDER_LINKS,
      true,
    ),
    project(
      6,
      "Healthcare App",
      ProjectCategory::Mobile,
      "Patient management system with telemedicine features",
      "https://images.unsplash.com/photo-1576091160399-112ba8d25d1f?w=600&h=400&fit=crop",
      &["Flutter", "Firebase", "WebRTC"],
      PLACEHOLDER_LINKS,
      false,
    ),
  ]
}

// ─── Static content ───────────────────────────────────────────────────────────

pub const HERO_STATS: &[HeroStat] = &[
  HeroStat { number: "500", metric: "PROJECTS" },
  HeroStat { number: "98", metric: "SATISFACTION" },
  HeroStat { number: "50", metric: "SPECIALISTS" },
  HeroStat { number: "05", metric: "YEARS" },
];

pub const SERVICE_CARDS: &[ServiceCard] = &[
  ServiceCard {
    icon:        "Search",
    title:       "SEO Optimization",
    description: "Boost your search rankings and drive organic traffic with our advanced SEO strategies and technical expertise.",
    features:    &["Keyword Research", "Technical SEO", "Content Optimization", "Link Building"],
  },
  ServiceCard {
    icon:        "Smartphone",
    title:       "Social Media Marketing",
    description: "Engage your audience across all platforms with compelling content and data-driven social media campaigns.",
    features:    &["Content Creation", "Community Management", "Paid Advertising", "Analytics"],
  },
  ServiceCard {
    icon:        "Monitor",
    title:       "Web Development",
    description: "Create stunning, responsive websites that convert visitors into customers and deliver exceptional user experiences.",
    features:    &["Custom Design", "Mobile-First", "E-commerce", "Performance Optimization"],
  },
  ServiceCard {
    icon:        "TrendingUp",
    title:       "PPC Advertising",
    description: "Maximize your ROI with targeted pay-per-click campaigns across Google, Facebook, and other platforms.",
    features:    &["Campaign Strategy", "Ad Creation", "Budget Optimization", "Conversion Tracking"],
  },
  ServiceCard {
    icon:        "Palette",
    title:       "Brand Design",
    description: "Build a memorable brand identity that resonates with your audience and stands out in the marketplace.",
    features:    &["Logo Design", "Brand Guidelines", "Visual Identity", "Marketing Materials"],
  },
  ServiceCard {
    icon:        "Zap",
    title:       "Digital Strategy",
    description: "Develop comprehensive digital strategies that align with your business goals and drive sustainable growth.",
    features:    &["Market Analysis", "Competitor Research", "Growth Planning", "Performance Metrics"],
  },
];

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
  ContactChannel {
    title:   "Email Us",
    content: "hello@nexusforge.com",
    link:    "mailto:hello@nexusforge.com",
  },
  ContactChannel {
    title:   "Call Us",
    content: "+1 (555) 123-4567",
    link:    "tel:+15551234567",
  },
  ContactChannel {
    title:   "Visit Us",
    content: "123 Innovation St, Tech City, TC 12345",
    link:    "#",
  },
];

pub const OPENING_HOURS: &[OpeningHours] = &[
  OpeningHours { days: "Monday - Friday", hours: "9:00 AM - 6:00 PM" },
  OpeningHours { days: "Saturday", hours: "10:00 AM - 4:00 PM" },
  OpeningHours { days: "Sunday", hours: "Closed" },
];

pub const DASHBOARD_STATS: &[Stat] = &[
  Stat { title: "Total Projects", value: "24", change: "+12%" },
  Stat { title: "Active Clients", value: "18", change: "+5%" },
  Stat { title: "Messages", value: "42", change: "+8%" },
  Stat { title: "Conversion Rate", value: "3.2%", change: "+0.8%" },
];

pub const DASHBOARD_ACTIVITY: &[Activity] = &[
  Activity { action: "New project added", time: "2 hours ago", detail: "John Doe" },
  Activity { action: "Client message received", time: "4 hours ago", detail: "Jane Smith" },
  Activity { action: "Portfolio updated", time: "1 day ago", detail: "Mike Johnson" },
  Activity { action: "Service published", time: "2 days ago", detail: "Sarah Wilson" },
];

pub const QUICK_ACTIONS: &[QuickAction] = &[
  QuickAction { label: "Add Project", href: "/admin/portfolio" },
  QuickAction { label: "Manage Services", href: "/admin/services" },
  QuickAction { label: "View Messages", href: "/admin/messages" },
  QuickAction { label: "Analytics", href: "/admin/analytics" },
];

pub const ANALYTICS_METRICS: &[Stat] = &[
  Stat { title: "Total Visitors", value: "24,543", change: "+12.5%" },
  Stat { title: "New Leads", value: "2,847", change: "+8.2%" },
  Stat { title: "Conversion Rate", value: "3.24%", change: "-0.8%" },
  Stat { title: "Contact Forms", value: "186", change: "+15.3%" },
];

pub const TOP_PAGES: &[PageViews] = &[
  PageViews { page: "/", views: 12543, percentage: 45 },
  PageViews { page: "/services", views: 8921, percentage: 32 },
  PageViews { page: "/portfolio", views: 4352, percentage: 16 },
  PageViews { page: "/contact", views: 1876, percentage: 7 },
];

pub const TOP_SOURCES: &[TrafficSource] = &[
  TrafficSource { source: "Google Search", visitors: 9543, percentage: 39 },
  TrafficSource { source: "Direct", visitors: 7321, percentage: 30 },
  TrafficSource { source: "Social Media", visitors: 4521, percentage: 18 },
  TrafficSource { source: "Referrals", visitors: 3158, percentage: 13 },
];

pub const ANALYTICS_ACTIVITY: &[Activity] = &[
  Activity { action: "New contact form submission", time: "2 minutes ago", detail: "form" },
  Activity { action: "Portfolio page viewed 15 times", time: "5 minutes ago", detail: "view" },
  Activity { action: "Services page shared on social media", time: "1 hour ago", detail: "share" },
  Activity { action: "New visitor from Google Search", time: "2 hours ago", detail: "visit" },
];
