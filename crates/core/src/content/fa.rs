use super::{
    CodeSnippet, Content, ExperienceItem, ExperienceSection, Footer, Hero, HeroStats, NavLabels,
    ProjectItem, ProjectsSection, SkillCategories, SkillsSection,
};

pub(super) static CONTENT: Content = Content {
    nav: NavLabels {
        brand: "Alihsnnzhd",
        home: "خانه",
        experience: "تجربه",
        projects: "پروژه‌ها",
        skills: "مهارت‌ها",
        contact: "ارتباط",
    },
    hero: Hero {
        title: "توسعه‌دهنده اندروید",
        roles: &[
            "علی اصغر حسن‌نژاد",
            "توسعه‌دهنده اندروید",
            "برنامه‌نویس جاوا",
            "طراح تجربه کاربری موبایل",
        ],
        description: "اپلیکیشن‌های بومی اندروید با جاوا و XML می‌سازم، رابط‌های وب واکنش‌گرا طراحی می‌کنم و روی اصول مهندسی نرم‌افزار و تجربه کاربری تمرکز دارم.",
        stats: HeroStats {
            experience: "سال تجربه",
            projects: "پروژه‌ی عملی",
        },
        cta: "دانلود رزومه",
    },
    experience: ExperienceSection {
        title: "تجربه‌های حرفه‌ای",
        items: &[
            ExperienceItem {
                date: "1403 - اکنون",
                title: "توسعه‌دهنده اندروید",
                description: "توسعه و نگهداشت اپلیکیشن‌های بومی با جاوا و XML، پیاده‌سازی UI/UX واکنش‌گرا، مدیریت ذخیره‌سازی داده و بهینه‌سازی عملکرد. تسلط به Android SDK، متریال دیزاین و معماری‌های مدرن اندروید.",
                tags: &["Java", "XML", "Android SDK", "Material Design"],
            },
            ExperienceItem {
                date: "1403 - اکنون",
                title: "شبیه‌سازی شبکه‌های کامپیوتری",
                description: "طراحی، پیاده‌سازی و شبیه‌سازی زیرساخت‌های شبکه‌ای چندلایه با استفاده از Cisco Packet Tracer. پیکربندی شبکه‌های LAN/WAN، Subnetting و Supernetting، و تسلط بر پروتکل‌های Routing و Switching.",
                tags: &["Cisco Packet Tracer", "IoT", "Routing", "Switching"],
            },
            ExperienceItem {
                date: "1401 - 1402",
                title: "توسعه‌دهنده وب (یادگیری)",
                description: "ساخت رابط‌های وب واکنش‌گرا با HTML، CSS و JavaScript. یادگیری الگوهای بهینه فرانت‌اند و ایجاد تجربه‌های کاربری مدرن.",
                tags: &["HTML", "CSS", "JavaScript"],
            },
        ],
    },
    projects: ProjectsSection {
        title: "پروژه‌ها",
        items: &[
            ProjectItem {
                title: "Tourismo",
                description: "همراه سفر هوشمند برای ایران با دسترسی آفلاین به جاذبه‌ها و بناهای تاریخی، راهنمای جامع شهرها، مسیر‌یابی و رابط کاربری ساده برای گردشگر.",
                tags: &["Java", "XML", "Room DB"],
                link: "https://cafebazaar.ir/app/com.example.tourismo",
                code_snippet: Some(CodeSnippet {
                    file: "MainActivity.java",
                    code: "public class MainActivity extends AppCompatActivity {
    @Override
    protected void onCreate(Bundle savedInstanceState) {
        super.onCreate(savedInstanceState);
        setContentView(R.layout.activity_main);
        // Initialize views and setup
    }
}",
                }),
            },
            ProjectItem {
                title: "NeuroBeats",
                description: "پخش‌کننده موسیقی مینیمال و سریع با رابط بصری چشم‌نواز، جست‌وجوی آنی، مدیریت کتابخانه محلی و کنترل‌های پخش روان.",
                tags: &["Java", "XML", "Media API"],
                link: "https://cafebazaar.ir/app/com.example.neurobeats",
                code_snippet: None,
            },
            ProjectItem {
                title: "Photo Studio",
                description: "وب‌سایت نمونه‌کار مدرن و واکنش‌گرا برای نمایش پروژه‌ها و مهارت‌ها با انیمیشن‌های تعاملی و طراحی تمیز.",
                tags: &["HTML", "CSS", "JS"],
                link: "http://alihsnnzhd.ir/PhotoArt/",
                code_snippet: None,
            },
        ],
    },
    skills: SkillsSection {
        title: "مهارت‌ها",
        categories: SkillCategories {
            mobile: "توسعه موبایل",
            web: "توسعه وب",
            programming: "زبان‌های برنامه‌نویسی",
        },
    },
    footer: Footer {
        text: "۱۴۰۳ | ساخته شده با عشق و کد",
    },
};
